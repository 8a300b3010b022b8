use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::ElementRef;

use crate::options::CellOptions;

/// Elements whose content never counts as cell text.
const FORBIDDEN_ELEMENTS: &[&str] = &["style", "link"];

/// Flattens the subtree of a table cell into plain text.
///
/// Text nodes are concatenated verbatim in document order. `style` and
/// `link` elements, and any element whose `class` attribute contains an
/// excluded substring, are dropped together with their subtree. `br` becomes
/// `\n` when line breaks are enabled. The cell element itself is never
/// checked against the exclusion rules, only its descendants.
pub fn flatten_cell(cell: ElementRef<'_>, options: &CellOptions) -> String {
    let mut text = String::new();
    for child in cell.children() {
        visit_node(child, options, &mut text);
    }

    if options.trim_cells {
        text.trim().to_string()
    } else {
        text
    }
}

fn visit_node(node: NodeRef<'_, Node>, options: &CellOptions, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            let name = element.name();
            let is_break = name.eq_ignore_ascii_case("br");
            if is_break && !options.include_line_breaks {
                return;
            }
            if FORBIDDEN_ELEMENTS
                .iter()
                .any(|forbidden| name.eq_ignore_ascii_case(forbidden))
            {
                return;
            }
            if options
                .exclusion
                .excludes(element.attr("class").unwrap_or_default())
            {
                return;
            }
            if is_break {
                out.push('\n');
                return;
            }
            for child in node.children() {
                visit_node(child, options, out);
            }
        }
        // Comments, doctypes and processing instructions carry no cell text.
        _ => {}
    }
}
