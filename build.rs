use std::fs;

fn main() {
    // 版本号来自 VERSION 文件
    let version = fs::read_to_string("VERSION")
        .expect("Failed to read VERSION file")
        .trim()
        .to_string();

    println!("cargo:rustc-env=APP_VERSION={}", version);

    println!("cargo:rerun-if-changed=VERSION");
    // 模板由 rust-embed 在编译时嵌入，变更时需要重新编译
    println!("cargo:rerun-if-changed=embedded/templates");
}
