// Release notes and announcement composition from commit history

use tracing::debug;

use crate::models::commit::Commit;
use crate::services::git::GitClient;
use crate::utils::config::{Config, EmailConfig};
use crate::utils::dates;

/// Separator line between commits in a rendered difference block
const DIFF_SEPARATOR: &str = "=========================================";

/// Render the commit difference between two revisions as a text block
pub fn render_diff(newer: &str, older: &str, commits: &[Commit]) -> String {
    let mut block = format!("Commit difference between {} and {}:\n", newer, older);
    for commit in commits {
        block.push_str(DIFF_SEPARATOR);
        block.push('\n');
        block.push_str(&format!("Author: {}\n", commit.author));
        block.push_str(&format!("Date: {}\n", dates::format_timestamp(&commit.date)));
        block.push_str(&format!("Title: {}\n", commit.title));
        block.push_str(&format!("Message: {}\n", commit.message));
        block.push_str(DIFF_SEPARATOR);
        block.push('\n');
    }
    block
}

/// Render a commit list as a plain text change log
pub fn render_text_changelog(commits: &[Commit]) -> String {
    commits
        .iter()
        .map(|commit| {
            format!(
                "   *  {}\n      {}\n      {}\n      {}\n",
                commit.title,
                commit.author,
                dates::format_timestamp(&commit.date),
                commit.message
            )
        })
        .collect()
}

/// Render a commit list as an HTML change log
pub fn render_html_changelog(commits: &[Commit]) -> String {
    let items: String = commits
        .iter()
        .map(|commit| {
            format!(
                "<li>\n   {}\n   {}\n   {}\n   {}\n</li>\n",
                escape_html(&commit.title),
                escape_html(&commit.author.to_string()),
                dates::format_timestamp(&commit.date),
                escape_html(&commit.message)
            )
        })
        .collect();
    format!("<ul>\n{}</ul>\n", items)
}

/// Escape the characters that would break HTML change log markup
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A composed release announcement, ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Subject line
    pub subject: String,
    /// Recipient address
    pub to: String,
    /// Sender address
    pub from: String,
    /// Whether the body is HTML
    pub html: bool,
    /// The message body
    pub body: String,
}

/// Compose a release announcement for a version from its commits.
///
/// Headers come from the email configuration. The body carries the released
/// version, the author of the newest commit and the change log, in text or
/// HTML form depending on the configured flag.
pub fn compose(email: &EmailConfig, version: &str, commits: &[Commit]) -> Announcement {
    debug!(
        "Composing announcement for version {} from {} commits",
        version,
        commits.len()
    );

    let author = commits
        .first()
        .map(|commit| commit.author.to_string())
        .unwrap_or_default();

    let body = if email.html {
        format!(
            "<html><body>\n<h1>{}</h1>\n<p>Release {} by {}</p>\n{}</body></html>\n",
            escape_html(&email.subject),
            escape_html(version),
            escape_html(&author),
            render_html_changelog(commits)
        )
    } else {
        format!(
            "{}\n\nRelease {} by {}\n\nChange log:\n{}",
            email.subject,
            version,
            author,
            render_text_changelog(commits)
        )
    };

    Announcement {
        subject: email.subject.clone(),
        to: email.to.clone(),
        from: email.from.clone(),
        html: email.html,
        body,
    }
}

/// Compose the announcement for the latest release of a repository: the
/// current tag, announced with the commits since the previous commit.
pub async fn compose_latest(git: &GitClient, config: &Config) -> anyhow::Result<Announcement> {
    let commits = git.commits_between("HEAD", "HEAD~1").await?;
    let version = git.current_tag().await?;
    Ok(compose(&config.email, &version, &commits))
}
