// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_comment(sections: usize) -> String {
    let base = "Package example shows how comments are laid out, see https://example.org/doc.\n\nUsage\n\nCall Open and then Read:\n\n\tf, err := Open(\"name\")\n\tif err != nil {\n\t\treturn err\n\t}\n\nA closing paragraph that mentions Reader and Writer.\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_example_body(lines: usize) -> String {
    let mut body = String::from("{\n");
    for i in 0..lines {
        body.push_str(&format!("\ts{i} := `raw\n\ttext {i}`\n\tfmt.Println(s{i}, \"q\\\"{i}\")\n"));
    }
    body.push_str("\t// Output: done\n}");
    body
}
