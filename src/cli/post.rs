//! Post command implementations

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, CreateArgs, OutputFormat};
use crate::client::EsaApi;
use crate::client::models::{NewPost, Post};
use crate::error::Result;
use crate::models::PostDisplay;
use crate::output::{Formattable, json, table};

/// Run the posts command
pub async fn list(opts: &GlobalOptions, page: u32, query: &[String]) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    println!("{}", render_posts(&ctx.client, page, query, ctx.format).await?);
    Ok(())
}

/// Run the post command
pub async fn get(opts: &GlobalOptions, number: u64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let post = ctx.client.get_post(number).await?;
    println!("{}", render_post(&post, ctx.format)?);
    Ok(())
}

/// Run the create command
pub async fn create(opts: &GlobalOptions, args: &CreateArgs) -> Result<()> {
    let new_post = build_new_post(args)?;
    let ctx = CommandContext::new(opts)?;
    println!("{}", create_and_render(&ctx.client, &new_post, ctx.format).await?);
    Ok(())
}

async fn render_posts(
    client: &impl EsaApi,
    page: u32,
    query: &[String],
    format: OutputFormat,
) -> Result<String> {
    let response = client.get_posts(page, query).await?;
    debug!(
        "Fetched {} of {} posts (page {})",
        response.posts.len(),
        response.total_count,
        response.page
    );

    let next_page = response.next_page;
    let total = response.total_count;
    let rows: Vec<PostDisplay> = response.posts.into_iter().map(PostDisplay::from).collect();
    let mut output = rows.format(format)?;

    if format == OutputFormat::Pretty {
        output.push_str(&format!("\n{} posts", total));
        if let Some(next) = next_page {
            output.push_str(&format!(", more with --page {}", next).dimmed().to_string());
        }
    }
    Ok(output)
}

fn render_post(post: &Post, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(json::format_json(post)?);
    }

    let title = if post.full_name.is_empty() {
        &post.name
    } else {
        &post.full_name
    };
    let mut fields = vec![
        ("Number", format!("#{}", post.number)),
        ("Status", if post.wip { "WIP" } else { "Shipped" }.to_string()),
        ("URL", post.url.clone()),
        ("Updated", post.updated_at.to_rfc3339()),
    ];
    if let Some(author) = &post.updated_by {
        fields.push(("Updated by", author.screen_name.clone()));
    }

    let mut output = format!("{}\n\n{}", title.bold(), table::format_fields(&fields));
    if format == OutputFormat::Pretty && !post.body_md.is_empty() {
        output.push_str("\n\n");
        output.push_str(post.body_md.trim_end());
    }
    Ok(output)
}

/// Build the payload from CLI arguments, reading `--body-file` if given.
fn build_new_post(args: &CreateArgs) -> Result<NewPost> {
    let body_md = match (&args.body_md, &args.body_file) {
        (Some(body), _) => body.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    Ok(NewPost {
        name: args.name.clone(),
        body_md,
        tags: args.tags.clone(),
        category: args.category.clone(),
        wip: args.wip,
        message: args.message.clone(),
    })
}

async fn create_and_render(
    client: &impl EsaApi,
    new_post: &NewPost,
    format: OutputFormat,
) -> Result<String> {
    let post = client.create_post(new_post).await?;
    debug!("Created post #{}", post.number);

    if format == OutputFormat::Json {
        return Ok(json::format_json(&post)?);
    }
    Ok(format!(
        "{} Created post #{}: {}\n  {}",
        "✓".green(),
        post.number,
        post.full_name.bold(),
        post.url
    ))
}
