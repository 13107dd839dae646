use streakwise_core::todos;

use super::{load_snapshot, today};

pub fn run(days: u32) -> Result<(), Box<dyn std::error::Error>> {
    let (_, snapshot) = load_snapshot()?;
    let outstanding = todos(&snapshot.habits, &snapshot.entries, today(), days);

    if outstanding.is_empty() {
        println!("nothing to record");
        return Ok(());
    }
    for (date, habits) in &outstanding {
        println!("{date}");
        for habit in habits {
            println!("  {habit}");
        }
    }
    Ok(())
}
