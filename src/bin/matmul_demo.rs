use rustalgo::demo::MatmulScenario;
use rustalgo::Result;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    for line in MatmulScenario::default().report()? {
        println!("{line}");
    }
    Ok(())
}
