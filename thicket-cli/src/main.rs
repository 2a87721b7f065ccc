//! thicket CLI
//!
//! Parses a markup file (or an inline string) and prints the resulting tree.
//!
//! Usage:
//!   thicket <file>                 Print the tree as indented markup
//!   thicket <file> --json          Print the tree as nested JSON
//!   thicket <file> --issues        Also list the recoveries the parser applied
//!   thicket --html '<p>Hello</p>'  Parse an inline string

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser as ClapParser;
use owo_colors::OwoColorize;
use serde_json::{Map, Value, json};
use thicket_common::warning::clear_warnings;
use thicket_dom::{DomTree, NodeId, NodeType};
use thicket_html::{Parser, print_tree};

/// Lenient HTML and XML tree dump
#[derive(ClapParser, Debug)]
#[command(name = "thicket")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree of a file
    thicket ./index.html

    # Parse inline markup
    thicket --html '<ul><li>A<li>B</ul>'

    # JSON output, with recoveries on stderr as they happen
    thicket --json --warnings ./index.html
"#)]
struct Cli {
    /// Markup file to parse
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse this string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print the tree as JSON instead of indented markup
    #[arg(short, long)]
    json: bool,

    /// List the recoveries applied while parsing
    #[arg(short, long)]
    issues: bool,

    /// Echo each recovery to stderr as it is applied
    #[arg(short, long)]
    warnings: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = load_source(&cli)?;

    clear_warnings();
    let mut parser = Parser::new();
    if cli.warnings {
        parser = parser.with_diagnostics();
    }
    let _ = parser
        .parse_bytes(&source)
        .context("failed to parse markup")?;

    if cli.json {
        let document = json!({
            "doctype": parser.doctype(),
            "tree": node_to_json(parser.tree(), NodeId::ROOT),
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        if let Some(doctype) = parser.doctype() {
            println!("{}", format!("<!{doctype}>").dimmed());
        }
        print_tree(parser.tree());
    }

    if cli.issues {
        print_issues(&parser);
    }
    Ok(())
}

/// Read the markup named on the command line.
fn load_source(cli: &Cli) -> Result<Vec<u8>> {
    if let Some(ref html) = cli.html {
        Ok(html.clone().into_bytes())
    } else if let Some(ref path) = cli.path {
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    } else {
        bail!("no input: pass a FILE or --html")
    }
}

fn print_issues(parser: &Parser) {
    let issues = parser.issues();
    eprintln!();
    eprintln!("{}", format!("=== Recoveries ({}) ===", issues.len()).bold());
    for issue in issues {
        eprintln!(
            "  {} {}",
            format!("{}:{}", issue.line, issue.column).yellow(),
            issue.message
        );
    }
}

/// Nested JSON for one node and everything below it.
fn node_to_json(tree: &DomTree, id: NodeId) -> Value {
    let Some(node) = tree.get(id) else {
        return Value::Null;
    };
    let mut object = Map::new();

    match &node.node_type {
        NodeType::Document => {
            let _ = object.insert("type".into(), "document".into());
        }
        NodeType::Element(data) => {
            let _ = object.insert("type".into(), "element".into());
            let _ = object.insert("tagName".into(), data.tag_name.clone().into());
            let attributes = serde_json::to_value(&data.attrs).unwrap_or_default();
            let _ = object.insert("attributes".into(), attributes);
        }
        NodeType::Text(text) => {
            let _ = object.insert("type".into(), "text".into());
            let _ = object.insert("content".into(), text.clone().into());
        }
        NodeType::Comment(text) => {
            let _ = object.insert("type".into(), "comment".into());
            let _ = object.insert("content".into(), text.clone().into());
        }
    }

    if !node.children.is_empty() {
        let children = node
            .children
            .iter()
            .map(|&child| node_to_json(tree, child))
            .collect();
        let _ = object.insert("children".into(), Value::Array(children));
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use thicket_html::parse_document;

    use super::*;

    #[test]
    fn test_node_to_json_nests_children() {
        let document = parse_document("<p class=a hidden>hi<!-- c --></p>").unwrap();
        let value = node_to_json(&document.tree, NodeId::ROOT);
        assert_eq!(
            value,
            json!({
                "type": "document",
                "children": [{
                    "type": "element",
                    "tagName": "p",
                    "attributes": { "class": "a", "hidden": true },
                    "children": [
                        { "type": "text", "content": "hi" },
                        { "type": "comment", "content": "c" }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_cli_rejects_path_with_inline_html() {
        let result = Cli::try_parse_from(["thicket", "file.html", "--html", "<p>"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_source_prefers_inline_html() {
        let cli = Cli::try_parse_from(["thicket", "--html", "<p>x</p>"]).unwrap();
        assert_eq!(load_source(&cli).unwrap(), b"<p>x</p>".to_vec());

        let cli = Cli::try_parse_from(["thicket"]).unwrap();
        assert!(load_source(&cli).is_err());
    }
}
