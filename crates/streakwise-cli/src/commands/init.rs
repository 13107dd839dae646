use streakwise_core::FileRepository;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let repo = FileRepository::open_default();
    if repo.initialize()? {
        println!("initialized {}", repo.dir().display());
        println!("edit {} to declare your habits", repo.habits_path().display());
    } else {
        println!("already initialized at {}", repo.dir().display());
    }
    Ok(())
}
