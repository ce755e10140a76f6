use restock::ui::output;

fn main() {
    if let Err(err) = restock::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
