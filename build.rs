fn main() {
    // opencv's binding generator needs libclang; on macOS point it at the CLT copy
    // unless the caller already chose one.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos")
        && std::env::var_os("LIBCLANG_PATH").is_none()
    {
        let clt_lib = "/Library/Developer/CommandLineTools/usr/lib";
        std::env::set_var("LIBCLANG_PATH", clt_lib);
        std::env::set_var("DYLD_FALLBACK_LIBRARY_PATH", clt_lib);
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LIBCLANG_PATH");
}
