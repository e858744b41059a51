//! Custom Markdown extractor (§6): Markdown has no tree-sitter grammar in
//! this pipeline, so its query keys are produced by line-oriented regex
//! scanning rather than AST queries. Net-new — no teacher or pack analog —
//! grounded on the corpus's general "plain function returning a `Vec` of
//! typed hits" shape (`entities.rs`/`deps.rs`) adapted to line scanning.

use crate::processor::{ResultData, TypedResult};
use regex::Regex;
use sqa_core::Location;
use std::sync::OnceLock;

fn image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)(?:\s+\"[^\"]*\")?\)").unwrap())
}

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|[^!])\[([^\]]*)\]\(([^)\s]+)(?:\s+\"[^\"]*\")?\)").unwrap())
}

fn wiki_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[([^\]|]+)(?:\|[^\]]*)?\]\]").unwrap())
}

fn symbol_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@([A-Za-z_][A-Za-z0-9_./:-]*)").unwrap())
}

fn hashtag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\s)#([A-Za-z][A-Za-z0-9_-]*)\b").unwrap())
}

fn include_directive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?:\{\{\s*include:\s*([^}]+?)\s*\}\}|<!--\s*include:\s*(.+?)\s*-->)"#)
            .unwrap()
    })
}

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+?)\s*$").unwrap())
}

fn heading_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#([A-Za-z][A-Za-z0-9_-]*)").unwrap())
}

fn fence_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^```\s*(\S*)\s*(.*)$").unwrap())
}

fn single_line_location(line_idx: usize, start_col: usize, end_col: usize) -> Location {
    Location {
        line: line_idx as u32 + 1,
        column: start_col as u32,
        end_line: line_idx as u32 + 1,
        end_column: end_col as u32,
    }
}

fn result(query_name: &str, location: Location, node_text: &str, data: ResultData) -> TypedResult {
    TypedResult {
        query_name: query_name.to_string(),
        location,
        node_text: node_text.to_string(),
        data,
    }
}

/// Runs every Markdown query key over `source`, returning results keyed by
/// query name, mirroring the shape `QueryBridge::execute_all_language_queries`
/// returns for tree-sitter languages.
pub fn extract_all(source: &str) -> std::collections::HashMap<String, Vec<TypedResult>> {
    let mut out = std::collections::HashMap::new();
    out.insert("markdown-images".to_string(), images(source));
    out.insert("markdown-links".to_string(), links(source));
    out.insert("markdown-wiki-links".to_string(), wiki_links(source));
    out.insert("markdown-symbol-refs".to_string(), symbol_refs(source));
    out.insert("markdown-hashtags".to_string(), hashtags(source));
    out.insert(
        "markdown-code-block-file-refs".to_string(),
        code_block_file_refs(source),
    );
    out.insert(
        "markdown-include-directives".to_string(),
        include_directives(source),
    );
    out.insert("markdown-headings".to_string(), headings(source));
    out
}

pub fn images(source: &str) -> Vec<TypedResult> {
    let mut out = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        for cap in image_re().captures_iter(line) {
            let whole = cap.get(0).unwrap();
            out.push(result(
                "markdown-images",
                single_line_location(idx, whole.start(), whole.end()),
                whole.as_str(),
                ResultData::MarkdownImage {
                    alt: cap[1].to_string(),
                    target: cap[2].to_string(),
                },
            ));
        }
    }
    out
}

pub fn links(source: &str) -> Vec<TypedResult> {
    let mut out = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        for cap in link_re().captures_iter(line) {
            let whole = cap.get(0).unwrap();
            out.push(result(
                "markdown-links",
                single_line_location(idx, whole.start(), whole.end()),
                whole.as_str(),
                ResultData::MarkdownLink {
                    text: cap[1].to_string(),
                    target: cap[2].to_string(),
                },
            ));
        }
    }
    out
}

pub fn wiki_links(source: &str) -> Vec<TypedResult> {
    let mut out = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        for cap in wiki_link_re().captures_iter(line) {
            let whole = cap.get(0).unwrap();
            out.push(result(
                "markdown-wiki-links",
                single_line_location(idx, whole.start(), whole.end()),
                whole.as_str(),
                ResultData::MarkdownWikiLink {
                    target: cap[1].to_string(),
                },
            ));
        }
    }
    out
}

pub fn symbol_refs(source: &str) -> Vec<TypedResult> {
    let mut out = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        for cap in symbol_ref_re().captures_iter(line) {
            let whole = cap.get(0).unwrap();
            out.push(result(
                "markdown-symbol-refs",
                single_line_location(idx, whole.start(), whole.end()),
                whole.as_str(),
                ResultData::MarkdownSymbolRef {
                    name: cap[1].to_string(),
                },
            ));
        }
    }
    out
}

pub fn hashtags(source: &str) -> Vec<TypedResult> {
    let mut out = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        // Heading lines use leading `#` for structure, not as a hashtag.
        if heading_re().is_match(line) {
            continue;
        }
        for cap in hashtag_re().captures_iter(line) {
            let whole = cap.get(0).unwrap();
            out.push(result(
                "markdown-hashtags",
                single_line_location(idx, whole.start(), whole.end()),
                whole.as_str(),
                ResultData::MarkdownHashtag {
                    tag: cap[1].to_string(),
                },
            ));
        }
    }
    out
}

/// Fenced code blocks whose info string names a file path (contains `/` or
/// a `.` followed by an extension), e.g. ```` ```ts src/app.ts ````.
pub fn code_block_file_refs(source: &str) -> Vec<TypedResult> {
    let mut out = Vec::new();
    let mut in_fence = false;
    for (idx, line) in source.lines().enumerate() {
        if let Some(cap) = fence_open_re().captures(line) {
            if !in_fence {
                let rest = cap.get(2).map(|m| m.as_str()).unwrap_or("");
                if let Some(path) = rest.split_whitespace().find(|tok| looks_like_path(tok)) {
                    out.push(result(
                        "markdown-code-block-file-refs",
                        single_line_location(idx, 0, line.len()),
                        line,
                        ResultData::MarkdownCodeBlockFileRef {
                            path: path.to_string(),
                        },
                    ));
                }
            }
            in_fence = !in_fence;
        }
    }
    out
}

fn looks_like_path(token: &str) -> bool {
    token.contains('/') || (token.contains('.') && !token.starts_with('.'))
}

pub fn include_directives(source: &str) -> Vec<TypedResult> {
    let mut out = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if let Some(cap) = include_directive_re().captures(line) {
            let whole = cap.get(0).unwrap();
            let path = cap
                .get(1)
                .or_else(|| cap.get(2))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            out.push(result(
                "markdown-include-directives",
                single_line_location(idx, whole.start(), whole.end()),
                whole.as_str(),
                ResultData::MarkdownIncludeDirective { path },
            ));
        }
    }
    out
}

pub fn headings(source: &str) -> Vec<TypedResult> {
    let mut out = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let Some(cap) = heading_re().captures(line) else {
            continue;
        };
        let level = cap[1].len() as u8;
        let raw_text = cap[2].to_string();
        let tags: Vec<String> = heading_tag_re()
            .captures_iter(&raw_text)
            .map(|c| c[1].to_string())
            .collect();
        let text = heading_tag_re().replace_all(&raw_text, "").trim().to_string();
        out.push(result(
            "markdown-headings",
            single_line_location(idx, 0, line.len()),
            line,
            ResultData::MarkdownHeading { level, text, tags },
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_link_and_image_distinctly() {
        let src = "See ![alt text](./img.png) and [docs](./docs.md).";
        let imgs = images(src);
        assert_eq!(imgs.len(), 1);
        let lnks = links(src);
        assert_eq!(lnks.len(), 1);
        assert_eq!(
            lnks[0].node_text.contains("docs.md"),
            true
        );
    }

    #[test]
    fn extracts_wiki_link_target() {
        let src = "Related: [[Some Page]]";
        let out = wiki_links(src);
        assert_eq!(out.len(), 1);
        match &out[0].data {
            ResultData::MarkdownWikiLink { target } => assert_eq!(target, "Some Page"),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn heading_extracts_level_text_and_tags() {
        let src = "## Getting Started #guide #intro";
        let out = headings(src);
        assert_eq!(out.len(), 1);
        match &out[0].data {
            ResultData::MarkdownHeading { level, text, tags } => {
                assert_eq!(*level, 2);
                assert_eq!(text, "Getting Started");
                assert_eq!(tags, &vec!["guide".to_string(), "intro".to_string()]);
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn hashtag_not_confused_with_heading_marker() {
        let src = "# Title\nUse #important tag here.";
        let tags = hashtags(src);
        assert_eq!(tags.len(), 1);
        match &tags[0].data {
            ResultData::MarkdownHashtag { tag } => assert_eq!(tag, "important"),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn code_block_file_ref_detects_path_in_info_string() {
        let src = "```ts src/app.ts\nconst x = 1;\n```\n";
        let refs = code_block_file_refs(src);
        assert_eq!(refs.len(), 1);
        match &refs[0].data {
            ResultData::MarkdownCodeBlockFileRef { path } => assert_eq!(path, "src/app.ts"),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn include_directive_extracts_path() {
        let src = "{{include: ./partials/header.md}}";
        let out = include_directives(src);
        assert_eq!(out.len(), 1);
        match &out[0].data {
            ResultData::MarkdownIncludeDirective { path } => {
                assert_eq!(path, "./partials/header.md");
            }
            _ => panic!("wrong variant"),
        }
    }
}
