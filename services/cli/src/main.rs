use leads_navigator_cli::run;

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
