//! Parse-tree diagrams on a character grid.
//!
//! Layout runs in three passes over a scratch tree. A post-order measure
//! pass computes each subtree's width and the column of its label's
//! center, a pre-order place pass turns those relative centers into
//! absolute columns, and a paint pass writes labels and connectors into a
//! 2D grid. Node rows alternate with connector rows, so a tree of depth
//! `d` paints `2d + 1` rows.

use doodle_ir::{Node, ParseTree, Symbol};

/// Horizontal spacing between sibling subtrees.
const GAP: usize = 4;

/// Scratch node carrying layout results alongside the label text.
struct LayoutNode {
    label: String,
    children: Vec<LayoutNode>,
    /// Total width of this subtree after measuring.
    width: usize,
    /// Column of the label center, relative to the subtree's left edge.
    center: usize,
    /// Column of the label center, absolute, after placing.
    x: usize,
}

impl LayoutNode {
    fn from_symbol(symbol: &Symbol) -> LayoutNode {
        match symbol {
            Symbol::Terminal(text) => LayoutNode {
                label: text.clone(),
                children: Vec::new(),
                width: 0,
                center: 0,
                x: 0,
            },
            Symbol::NonTerminal(node) => Self::from_node(node),
        }
    }

    fn from_node(node: &Node) -> LayoutNode {
        LayoutNode {
            label: node.kind.tag().to_string(),
            children: node.children.iter().map(Self::from_symbol).collect(),
            width: 0,
            center: 0,
            x: 0,
        }
    }

    /// Number of levels below this node (0 for a leaf).
    fn depth_below(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth_below() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Post-order pass: compute `width` and `center` for this subtree.
    fn measure(&mut self) {
        let label_len = self.label.len();

        if self.children.is_empty() {
            self.width = label_len;
            self.center = label_len / 2;
            return;
        }

        let mut total_width = 0;
        for (i, child) in self.children.iter_mut().enumerate() {
            child.measure();
            if i > 0 {
                total_width += GAP;
            }
            total_width += child.width;
        }

        // Center between the first and last child centers. The last
        // child's center is its offset into the row plus its own center.
        let leftmost = self.children[0].center;
        let mut rightmost = 0;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                rightmost += GAP;
            }
            if i == self.children.len() - 1 {
                rightmost += child.center;
            } else {
                rightmost += child.width;
            }
        }
        let mut center = (leftmost + rightmost) / 2;

        // Widen or shift so the label itself fits inside the subtree.
        let min_width = center + (label_len + 1) / 2;
        if total_width < min_width {
            total_width = min_width;
        }
        let left_half = label_len / 2;
        if center < left_half {
            let shift = left_half - center;
            center += shift;
            total_width += shift;
        }

        self.width = total_width;
        self.center = center;
    }

    /// Pre-order pass: assign absolute center columns.
    fn place(&mut self, x_offset: usize) {
        self.x = x_offset + self.center;

        let mut child_x = x_offset;
        for child in &mut self.children {
            child.place(child_x);
            child_x += child.width + GAP;
        }
    }

    /// Write this node's label and connectors, then its children.
    fn paint(&self, grid: &mut [Vec<char>], depth: usize) {
        let row = depth * 2;
        let label_len = self.label.len();
        let start = self.x - label_len / 2;

        for (i, ch) in self.label.chars().enumerate() {
            put(grid, row, start + i, ch);
        }

        match self.children.as_slice() {
            [] => {}
            [only] => {
                put(grid, row + 1, only.x, '│');
            }
            children => {
                // Underscore rule from the leftmost to the rightmost child
                // center, skipping the label's own cells.
                let leftmost = children[0].x;
                let rightmost = children[children.len() - 1].x;
                let label_end = start + label_len;
                for col in leftmost..=rightmost {
                    if col < start || col >= label_end {
                        put(grid, row, col, '_');
                    }
                }
                for child in children {
                    let connector = match child.x.cmp(&self.x) {
                        std::cmp::Ordering::Equal => '│',
                        std::cmp::Ordering::Less => '/',
                        std::cmp::Ordering::Greater => '\\',
                    };
                    put(grid, row + 1, child.x, connector);
                }
            }
        }

        for child in &self.children {
            child.paint(grid, depth + 1);
        }
    }
}

fn put(grid: &mut [Vec<char>], row: usize, col: usize, ch: char) {
    if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
        *cell = ch;
    }
}

/// Render a parse tree as a diagram, one string per grid row.
///
/// Trailing spaces are trimmed from each row.
pub fn render(tree: &ParseTree) -> Vec<String> {
    let mut root = LayoutNode::from_node(&tree.root);
    root.measure();
    root.place(0);

    let height = root.depth_below() * 2 + 1;
    let mut grid = vec![vec![' '; root.width]; height];
    root.paint(&mut grid, 0);

    grid.into_iter()
        .map(|row| {
            let line: String = row.into_iter().collect();
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn diagram(input: &str) -> Vec<String> {
        let tree = match doodle_parse::parse(input) {
            Ok(tree) => tree,
            Err(err) => panic!("parse failed for {input:?}: {err}"),
        };
        render(&tree)
    }

    #[test]
    fn test_fill_diagram_exact() {
        let rows = diagram("HI fill A3 BYE");
        let expected = vec![
            " ___________<graph>___________",
            " /             │             \\",
            "HI          <draw>          BYE",
            "               │",
            "        ___<action>____",
            "        /      │      \\",
            "      fill    <x>    <y>",
            "              │      │",
            "              A      3",
        ];
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_rows_cover_every_level() {
        // Graph > Draw > Action > CoordX > letter is five levels, so nine
        // rows counting the connector rows in between.
        let rows = diagram("HI fill C3 BYE");
        assert_eq!(rows.len(), 9);
    }

    #[test]
    fn test_no_trailing_spaces() {
        for row in diagram("HI line D4,A2; bar B3,5 BYE") {
            assert_eq!(row.trim_end(), row);
        }
    }

    #[test]
    fn test_connector_rows_hold_only_connectors() {
        // Labels and underscores live on even rows; odd rows carry the
        // `/`, `│`, `\` links and nothing else.
        for (i, row) in diagram("HI bar A1,1; line A1,E5; fill B2 BYE")
            .iter()
            .enumerate()
        {
            if i % 2 == 1 {
                assert!(
                    row.chars().all(|c| matches!(c, ' ' | '/' | '│' | '\\')),
                    "row {i} is not a connector row: {row:?}"
                );
            }
        }
    }
}
