use comfy_table::{ContentArrangement, Table};
use pf_core::Difficulty;

pub fn run(difficulty: Option<Difficulty>) -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Title", "Difficulty", "Description"]);

    let listed = pf_stories::list_stories()
        .into_iter()
        .filter(|(_, info)| difficulty.is_none_or(|d| info.difficulty == d));
    for (key, info) in listed {
        table.add_row(vec![
            key.clone(),
            info.title.clone(),
            info.difficulty.to_string(),
            info.description.clone(),
        ]);
    }

    println!("{table}");
    Ok(())
}
