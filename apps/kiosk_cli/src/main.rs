use anyhow::{Context, Result};
use catalog::{Catalog, Project, ProjectId};
use clap::{Args, Parser, Subcommand};
use kiosk_core::{
    assistant::build_context,
    filter::{self, AwardFilter, FilterSelection, FilterValue},
    load_settings, AssistantGateway, AssistantQuery, FALLBACK_ANSWER,
};
use tracing_subscriber::EnvFilter;

/// Headless access to the capstone totem catalog and assistant.
#[derive(Parser, Debug)]
#[command(name = "totem", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List projects passing the given filters, in catalog order.
    Projects {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long)]
        json: bool,
    },
    /// List the Wall of Fame.
    Awards {
        #[arg(long)]
        json: bool,
    },
    /// Show one project in full.
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// List the partner directory with per-partner project counts.
    Partners {
        #[arg(long)]
        search: Option<String>,
    },
    /// List every tag, sorted.
    Tags,
    /// List every year, newest first.
    Years,
    /// Print the context document sent to the assistant.
    Context,
    /// Ask the assistant a question about the projects.
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    #[arg(long)]
    partner: Option<String>,
    #[arg(long)]
    tag: Option<String>,
    #[arg(long)]
    year: Option<i32>,
    /// Only projects with a Falconi award.
    #[arg(long)]
    awarded: bool,
}

impl FilterArgs {
    fn selection(&self) -> FilterSelection {
        FilterSelection {
            partner: FilterValue::from(self.partner.clone()),
            tag: FilterValue::from(self.tag.clone()),
            year: FilterValue::from(self.year),
            award: if self.awarded {
                AwardFilter::Awarded
            } else {
                AwardFilter::All
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = Catalog::builtin();

    match cli.command {
        Command::Projects { filters, json } => {
            let visible = filter::visible_projects(catalog, &filters.selection());
            print_projects(&visible, json)?;
        }
        Command::Awards { json } => {
            print_projects(&filter::awarded_projects(catalog), json)?;
        }
        Command::Show { id, json } => {
            let project = catalog
                .project(&ProjectId::new(id.as_str()))
                .with_context(|| format!("no project with id '{id}'"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(project)?);
            } else {
                print_detail(project);
            }
        }
        Command::Partners { search } => {
            for partner in filter::search_partners(catalog, search.as_deref().unwrap_or("")) {
                let works = filter::partner_project_count(catalog, partner);
                println!("{partner:<24} {works} works");
            }
        }
        Command::Tags => catalog.tags().iter().for_each(|tag| println!("{tag}")),
        Command::Years => catalog.years().iter().for_each(|year| println!("{year}")),
        Command::Context => println!("{}", build_context(catalog)),
        Command::Ask { query } => {
            let Some(query) = AssistantQuery::parse(&query.join(" ")) else {
                return Ok(());
            };
            let settings = load_settings()?;
            let answer = match AssistantGateway::from_settings(settings.assistant, catalog) {
                Ok(gateway) => gateway.ask(&query).await,
                Err(err) => {
                    tracing::error!("failed to build assistant client: {err}");
                    FALLBACK_ANSWER.to_string()
                }
            };
            println!("{answer}");
        }
    }

    Ok(())
}

fn print_projects(projects: &[&Project], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(projects)?);
        return Ok(());
    }
    if projects.is_empty() {
        println!("No projects match these filters");
        return Ok(());
    }
    for project in projects {
        println!("{}", summary_line(project));
    }
    Ok(())
}

fn summary_line(project: &Project) -> String {
    let award = if project.is_awarded() {
        format!(" [{}]", project.award.label())
    } else {
        String::new()
    };
    format!(
        "{:>4}  {}  {} ({}){award}",
        project.id,
        project.semester_label(),
        project.title,
        project.category.label()
    )
}

fn print_detail(project: &Project) {
    println!("{}", project.title);
    println!("{}", "=".repeat(project.title.len()));
    println!("Category: {}", project.category.label());
    println!("Semester: {}", project.semester_label());
    if project.is_awarded() {
        println!("Award:    {}", project.award.label());
    }
    if let Some(partner) = &project.partner {
        println!("Partner:  {partner}");
    }
    println!("Advisor:  {}", project.advisor);
    println!();
    println!("{}", project.long_description);
    println!();
    println!("Team:");
    for student in &project.students {
        println!("  - {} ({})", student.name, student.role);
    }
    println!("Tags: {}", project.tags.join(", "));
    if let Some(video) = &project.media.video_url {
        println!("Video: {video}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_args_select_everything() {
        assert!(FilterArgs::default().selection().is_unfiltered());
    }

    #[test]
    fn filter_args_map_to_selection() {
        let args = FilterArgs {
            partner: Some("Dell".into()),
            tag: None,
            year: Some(2024),
            awarded: true,
        };
        let selection = args.selection();
        assert_eq!(selection.partner, FilterValue::Only("Dell".to_string()));
        assert_eq!(selection.tag, FilterValue::All);
        assert_eq!(selection.year, FilterValue::Only(2024));
        assert_eq!(selection.award, AwardFilter::Awarded);
    }

    #[test]
    fn parses_ask_with_multiple_words() {
        let cli = Cli::try_parse_from(["totem", "ask", "which", "projects", "won?"])
            .expect("parse");
        match cli.command {
            Command::Ask { query } => assert_eq!(query.join(" "), "which projects won?"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn summary_line_marks_awards() {
        let project = Catalog::builtin()
            .project(&ProjectId::new("8"))
            .expect("project 8");
        let line = summary_line(project);
        assert!(line.contains("2023.2"));
        assert!(line.ends_with("[Falconi Excellence Project]"));
    }
}
