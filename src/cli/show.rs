use clap::ValueEnum;
use tracing::warn;

use crate::portfolio::Portfolio;
use crate::theme::ThemeContext;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Section {
    About,
    Education,
    Projects,
    Contact,
    Themes,
}

pub fn run(portfolio: &Portfolio, section: Option<Section>, theme: Option<&str>) {
    let mut ctx = ThemeContext::default();
    if let Some(name) = theme {
        if !ctx.select(name) {
            warn!("Unknown theme: {}", name);
        }
    }

    match section {
        Some(Section::About) => render_about(portfolio),
        Some(Section::Education) => render_education(portfolio),
        Some(Section::Projects) => render_projects(portfolio),
        Some(Section::Contact) => render_contact(portfolio),
        Some(Section::Themes) => render_themes(&ctx),
        None => {
            render_hero(portfolio, &ctx);
            render_about(portfolio);
            render_education(portfolio);
            render_projects(portfolio);
            render_contact(portfolio);
        }
    }
}

fn render_hero(portfolio: &Portfolio, ctx: &ThemeContext) {
    println!("# {}", portfolio.name);
    println!("A Full Stack Developer crafting elegant and robust digital experiences.");
    println!("Resume: {}", portfolio.resume_url);
    println!("Theme: {}", ctx.current().name);
    println!();
}

fn render_about(portfolio: &Portfolio) {
    println!("## About Me");
    for paragraph in &portfolio.bio {
        println!("{}", paragraph);
        println!();
    }
}

fn render_education(portfolio: &Portfolio) {
    println!("## My Education");
    for edu in &portfolio.education {
        println!("- {} — {} ({})", edu.degree, edu.institution, edu.dates);
    }
    println!();
}

fn render_projects(portfolio: &Portfolio) {
    println!("## My Recent Work");
    for project in &portfolio.projects {
        println!("### {}", project.name);
        println!("{}", project.description);
        println!("Tags: {}", project.tags.join(", "));
        println!("Code: {} | Demo: {}", project.github_url, project.demo_url);
        println!();
    }
}

fn render_contact(portfolio: &Portfolio) {
    println!("## Let's Build Something Together");
    println!("GitHub: {}", portfolio.social_links.github);
    println!("LinkedIn: {}", portfolio.social_links.linkedin);
    println!("Email: {}", portfolio.social_links.email);
    println!();
}

fn render_themes(ctx: &ThemeContext) {
    println!("## Themes");
    for theme in ctx.themes() {
        let marker = if theme == ctx.current() { "*" } else { " " };
        println!(
            "{} {} (primary {}, secondary {})",
            marker, theme.name, theme.primary, theme.secondary
        );
    }
    println!();
}
