//! Team command implementations

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::EsaApi;
use crate::client::models::{Team, TeamStats};
use crate::error::Result;
use crate::models::MemberDisplay;
use crate::output::{Formattable, json, table};

/// Run the team command
pub async fn get(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let team = ctx.client.get_team().await?;
    println!("{}", render_team(&team, ctx.format)?);
    Ok(())
}

/// Run the stats command
pub async fn stats(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let stats = ctx.client.get_team_stats().await?;
    println!("{}", render_stats(ctx.client.team(), &stats, ctx.format)?);
    Ok(())
}

/// Run the members command
pub async fn members(opts: &GlobalOptions, page: u32) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    println!("{}", render_members(&ctx.client, page, ctx.format).await?);
    Ok(())
}

fn render_team(team: &Team, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(json::format_json(team)?);
    }

    let fields = [
        ("Name", team.name.clone()),
        ("Privacy", team.privacy.clone()),
        ("Description", team.description.clone()),
        ("URL", team.url.clone()),
    ];
    Ok(format!(
        "{}\n\n{}",
        "Team".bold(),
        table::format_fields(&fields)
    ))
}

fn render_stats(team: &str, stats: &TeamStats, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(json::format_json(stats)?);
    }

    let fields = [
        ("Members", stats.members.to_string()),
        ("Posts", stats.posts.to_string()),
        ("  WIP", stats.posts_wip.to_string()),
        ("  Shipped", stats.posts_shipped.to_string()),
        ("Comments", stats.comments.to_string()),
        ("Stars", stats.stars.to_string()),
        ("Daily active users", stats.daily_active_users.to_string()),
        ("Weekly active users", stats.weekly_active_users.to_string()),
        ("Monthly active users", stats.monthly_active_users.to_string()),
    ];
    Ok(format!(
        "{}\n\n{}",
        format!("Statistics for {}", team).bold(),
        table::format_fields(&fields)
    ))
}

async fn render_members(client: &impl EsaApi, page: u32, format: OutputFormat) -> Result<String> {
    let response = client.get_team_members(page).await?;
    debug!(
        "Fetched {} of {} members (page {})",
        response.members.len(),
        response.total_count,
        response.page
    );

    let next_page = response.next_page;
    let total = response.total_count;
    let rows: Vec<MemberDisplay> = response.members.into_iter().map(MemberDisplay::from).collect();
    let mut output = rows.format(format)?;

    if format == OutputFormat::Pretty {
        output.push_str(&format!("\n{} members", total));
        if let Some(next) = next_page {
            output.push_str(&format!(", more with --page {}", next).dimmed().to_string());
        }
    }
    Ok(output)
}
