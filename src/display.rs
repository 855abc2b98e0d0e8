use crate::models::Project;

pub fn format_project(project: &Project) -> String {
    let name = non_empty_or(&project.name, "No Name Provided");
    let description = non_empty_or(&project.description, "No Description Available");
    let difficulty = if project.difficulty > 0 {
        project.difficulty.to_string()
    } else {
        "Not Specified".to_string()
    };
    let time_allotted = if project.time_allotted > 0.0 {
        format_hours(project.time_allotted)
    } else {
        "No Time Specified".to_string()
    };

    format!(
        "Name: {}\n\nDescription: {}\n\nDifficulty: {}\n\nAllotted Time: {}",
        name, description, difficulty, time_allotted
    )
}

pub fn display_project(project: &Project) {
    println!("\n{}", "=".repeat(60));
    println!("{}", format_project(project));
    println!("{}\n", "=".repeat(60));
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.1}", hours)
    } else {
        format!("{}", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_project() {
        let project = Project::new("Ray tracer".to_string(), "In a weekend".to_string(), 4, 12.0);
        assert_eq!(
            format_project(&project),
            "Name: Ray tracer\n\nDescription: In a weekend\n\nDifficulty: 4\n\nAllotted Time: 12.0"
        );
    }

    #[test]
    fn test_format_fractional_hours() {
        let project = Project::new("Lexer".to_string(), "Tokens".to_string(), 2, 1.5);
        assert!(format_project(&project).ends_with("Allotted Time: 1.5"));
    }

    #[test]
    fn test_format_placeholders() {
        let project = Project::new(String::new(), "  ".to_string(), 0, 0.0);
        let text = format_project(&project);
        assert!(text.contains("Name: No Name Provided"));
        assert!(text.contains("Description: No Description Available"));
        assert!(text.contains("Difficulty: Not Specified"));
        assert!(text.contains("Allotted Time: No Time Specified"));
    }
}
