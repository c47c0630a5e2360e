use rustalgo::demo::TopKScenario;
use rustalgo::Result;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    for line in TopKScenario::default().report()? {
        println!("{line}");
    }
    Ok(())
}
