mod app;
mod entrypoints;

fn main() -> std::process::ExitCode {
    entrypoints::main::main()
}
