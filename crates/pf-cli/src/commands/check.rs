use colored::Colorize;
use pf_core::validate_graph;

pub fn run() -> Result<(), String> {
    let mut errors = 0;
    let mut warnings = 0;

    for story in pf_stories::stories() {
        let issues = validate_graph(story);
        for issue in &issues {
            if issue.is_error {
                eprintln!("  {} [{}] {issue}", "✗".red(), story.key);
            } else {
                eprintln!("  {} [{}] {issue}", "!".yellow(), story.key);
            }
        }

        let story_errors = issues.iter().filter(|i| i.is_error).count();
        errors += story_errors;
        warnings += issues.len() - story_errors;

        if story_errors == 0 {
            println!(
                "  {} {} ({} scenes, {} endings)",
                "✓".green(),
                story.info.title,
                story.scenes.len(),
                story.ending_keys().len(),
            );
        }
    }

    if errors > 0 {
        return Err(format!(
            "{errors} error{} in story graphs",
            if errors == 1 { "" } else { "s" }
        ));
    }
    println!("  All checks passed for {} stories.", pf_stories::list_stories().len());
    if warnings > 0 {
        println!(
            "  {warnings} warning{}",
            if warnings == 1 { "" } else { "s" }
        );
    }
    Ok(())
}
