use std::fmt::Write;
use std::fs::{create_dir, File};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use serde_json::Value;

use content_collections::text_utils::slug_from_title;
use content_collections::util::os_helper::{get_name, initial_of};

use crate::{PostArgs, PostOutput};

fn get_author(args: &PostArgs) -> String {
    if let Some(ref name) = args.name {
        return name.clone();
    }

    get_name()
}

/// JSON strings are valid double-quoted YAML scalars
fn quoted(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

fn render_front_matter(name: &str, date: &NaiveDate, title: Option<&str>) -> String {
    let title = title.unwrap_or("Replace with title");
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "title: {}", quoted(title));
    let _ = writeln!(&mut buf, "titleHtml: {}", quoted(title));
    let _ = writeln!(&mut buf, "subtitle: \"Replace with subtitle\"");
    let _ = writeln!(&mut buf, "category: \"Uncategorized\"");
    let _ = writeln!(&mut buf, "date: {}", date.format("%Y-%m-%d"));
    let _ = writeln!(&mut buf, "readTime: \"5 min\"");
    let _ = writeln!(&mut buf, "thumbnail:");
    let _ = writeln!(&mut buf, "  src: \"./thumbnail.jpg\"");
    let _ = writeln!(&mut buf, "  alt: \"Replace with thumbnail description\"");
    let _ = writeln!(&mut buf, "heroImage:");
    let _ = writeln!(&mut buf, "  src: \"./hero.jpg\"");
    let _ = writeln!(&mut buf, "  alt: \"Replace with hero image description\"");
    let _ = writeln!(&mut buf, "  caption: \"Replace with hero image caption\"");
    let _ = writeln!(&mut buf, "tags: []");
    let _ = writeln!(&mut buf, "author:");
    let _ = writeln!(&mut buf, "  name: {}", quoted(name));
    let _ = writeln!(&mut buf, "  initial: {}", quoted(&initial_of(name)));
    let _ = writeln!(&mut buf, "  bio: \"Replace with author bio\"");
    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "");
    buf
}

fn render_body() -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "This is a body example");
    let _ = writeln!(&mut buf, "Please remove it and replace with your content");
    let _ = writeln!(&mut buf, "");
    let _ = writeln!(&mut buf, "<!-- more -->");
    let _ = writeln!(&mut buf, "");
    let _ = writeln!(&mut buf, "And this is the rest of your post");

    buf
}

fn write_post(path: &PathBuf, front_matter: &str, body: &str) -> Result<()> {
    use std::io::Write;
    let mut file = File::create(path).with_context(|| format!("Error creating {}", path.display()))?;
    file.write_all(front_matter.as_bytes())?;
    file.write_all(body.as_bytes())?;
    Ok(())
}

pub fn post_cmd(args: PostArgs) -> Result<()> {
    let name = get_author(&args);
    let date = Utc::now().date_naive();

    let title = match (&args.output, args.title.as_deref()) {
        (PostOutput::Stdout, title) => title,
        (_, Some(title)) => Some(title),
        (_, None) => bail!("For file and dir outputs, title is required"),
    };

    let front_matter = render_front_matter(&name, &date, title);
    let body = render_body();

    match (&args.output, title) {
        (PostOutput::File, Some(title)) => {
            let file_name = PathBuf::from(format!("{}.md", slug_from_title(title, &date)));
            println!("Creating file {}", file_name.display());
            write_post(&file_name, &front_matter, &body)?;
        }
        (PostOutput::Dir, Some(title)) => {
            let dir_name = PathBuf::from(slug_from_title(title, &date));
            let full_path = dir_name.join("index.md");
            println!("Creating dir post {}", full_path.display());
            create_dir(&dir_name).with_context(|| format!("Error creating directory {}", dir_name.display()))?;
            write_post(&full_path, &front_matter, &body)?;
        }
        _ => {
            println!("{}", front_matter);
            println!("{}", body);
        }
    };

    Ok(())
}
