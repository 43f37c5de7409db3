//! Tree-render protocol: projects the lossless AST down to a small,
//! owned tree of tags/text/raw nodes that a renderer (HTML, a GUI
//! widget tree, whatever) can walk without caring about parser-specific
//! details like delimiter tapes or scope bookkeeping.
//!
//! `RenderNode` is a plain owned enum rather than a `dyn Renderable`
//! object tree on purpose: nothing here needs dynamic dispatch, and an
//! owned tree sidesteps the lifetime plumbing a `Box<dyn Trait>` tree
//! would otherwise force onto every caller.

use crate::ast::block::{Alignment, Block, Document, Table};
use crate::ast::inline::{Inline, Link};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Element { tag: &'static str, attrs: Vec<(&'static str, String)>, children: Vec<RenderNode> },
    Text(String),
}

pub trait Renderable {
    fn render(&self) -> RenderNode;
}

fn element(tag: &'static str, children: Vec<RenderNode>) -> RenderNode {
    RenderNode::Element { tag, attrs: Vec::new(), children }
}

fn render_all(inlines: &[Inline]) -> Vec<RenderNode> {
    inlines.iter().map(Renderable::render).collect()
}

impl Renderable for Document {
    fn render(&self) -> RenderNode {
        element("document", self.blocks.iter().map(Renderable::render).collect())
    }
}

impl Renderable for Block {
    fn render(&self) -> RenderNode {
        match self {
            Block::Heading(h) => {
                let tag = match h.level {
                    1 => "h1",
                    2 => "h2",
                    3 => "h3",
                    4 => "h4",
                    5 => "h5",
                    _ => "h6",
                };
                let attrs = match &h.id {
                    Some(id) => vec![("id", id.text.text())],
                    None => Vec::new(),
                };
                RenderNode::Element { tag, attrs, children: render_all(&h.content) }
            }
            Block::Paragraph(p) => element("p", render_all(&p.content)),
            Block::Blockquote(bq) => element("blockquote", bq.content.iter().map(Renderable::render).collect()),
            Block::List(list) => {
                let tag = if list.ordered { "ol" } else { "ul" };
                element(tag, list.items.iter().map(|item| element("li", item.content.iter().map(Renderable::render).collect())).collect())
            }
            Block::CodeBlock(code) => {
                let text = code.lines.iter().map(|l| l.text()).collect::<Vec<_>>().join("\n");
                element("pre", vec![element("code", vec![RenderNode::Text(text)])])
            }
            Block::ThematicBreak(_) => element("hr", Vec::new()),
            Block::Table(table) => render_table(table),
            Block::BlankLines(_) => element("fragment", Vec::new()),
        }
    }
}

fn render_table(table: &Table) -> RenderNode {
    let alignment_attr = |alignment: Alignment| match alignment {
        Alignment::None => None,
        Alignment::Left => Some(("align", "left".to_string())),
        Alignment::Right => Some(("align", "right".to_string())),
        Alignment::Center => Some(("align", "center".to_string())),
    };

    let header_cells: Vec<RenderNode> = table
        .header
        .cells
        .iter()
        .zip(table.separator.cells.iter())
        .map(|(cell, align_cell)| {
            let mut attrs = Vec::new();
            if let Some(attr) = alignment_attr(align_cell.alignment) {
                attrs.push(attr);
            }
            RenderNode::Element { tag: "th", attrs, children: vec![cell.render()] }
        })
        .collect();

    let body_rows: Vec<RenderNode> = table
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .zip(table.separator.cells.iter())
                .map(|(cell, align_cell)| {
                    let mut attrs = Vec::new();
                    if let Some(attr) = alignment_attr(align_cell.alignment) {
                        attrs.push(attr);
                    }
                    RenderNode::Element { tag: "td", attrs, children: vec![cell.render()] }
                })
                .collect();
            element("tr", cells)
        })
        .collect();

    element(
        "table",
        vec![element("thead", vec![element("tr", header_cells)]), element("tbody", body_rows)],
    )
}

impl Renderable for Inline {
    fn render(&self) -> RenderNode {
        match self {
            Inline::Text(tape) => RenderNode::Text(tape.text()),
            Inline::Raw(tape) => RenderNode::Text(tape.text()),
            Inline::Emphasis(d) => element("em", render_all(&d.value)),
            Inline::Strong(d) => element("strong", render_all(&d.value)),
            Inline::StrongEmphasis(d) => element("strong", vec![element("em", render_all(&d.value))]),
            Inline::Highlight(d) => element("mark", render_all(&d.value)),
            Inline::Strikethrough(d) => element("del", render_all(&d.value)),
            Inline::Sub(d) => element("sub", render_all(&d.value)),
            Inline::Sup(d) => element("sup", render_all(&d.value)),
            Inline::Code(d) => element("code", vec![RenderNode::Text(d.value.text())]),
            Inline::HardBreak { .. } => element("br", Vec::new()),
            Inline::SoftBreak(tape) => RenderNode::Text(tape.text()),
            Inline::Link(link) => render_link("a", "href", link),
            Inline::Image(link) => render_link("img", "src", link),
        }
    }
}

fn render_link(tag: &'static str, dest_attr: &'static str, link: &Link) -> RenderNode {
    let mut attrs = vec![(dest_attr, link.destination.target.text())];
    if let Some(title) = &link.destination.title {
        attrs.push(("title", title.value.text()));
    }
    RenderNode::Element { tag, attrs, children: render_all(&link.label.value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::block::{Heading, Paragraph};
    use crate::tape::Tape;

    #[test]
    fn heading_renders_to_numbered_tag() {
        let heading = Heading { marker: Tape::from_str("##"), level: 2, content: vec![Inline::Text(Tape::from_str("Hi"))], id: None };
        match heading.render() {
            RenderNode::Element { tag, children, .. } => {
                assert_eq!(tag, "h2");
                assert_eq!(children, vec![RenderNode::Text("Hi".to_string())]);
            }
            _ => panic!("expected an element"),
        }
    }

    #[test]
    fn paragraph_renders_its_inline_children_in_order() {
        let paragraph = Paragraph {
            content: vec![Inline::Text(Tape::from_str("a")), Inline::Text(Tape::from_str("b"))],
        };
        match Block::Paragraph(paragraph).render() {
            RenderNode::Element { tag, children, .. } => {
                assert_eq!(tag, "p");
                assert_eq!(children.len(), 2);
            }
            _ => panic!("expected an element"),
        }
    }
}
