// === Entry point for desktop ===
pub fn main() -> std::process::ExitCode {
    super::run::native_main()
}
