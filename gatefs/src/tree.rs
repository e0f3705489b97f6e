use std::collections::BTreeMap;

#[derive(Debug)]
pub struct TreeNode {
    name: String,
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in name order.
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.children.values()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Render this node and its descendants down to `max_depth` levels.
    pub fn render(&self, max_depth: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0, max_depth, true, "");
        out
    }

    fn render_into(
        &self,
        out: &mut String,
        depth: usize,
        max_depth: usize,
        is_last: bool,
        prefix: &str,
    ) {
        if depth > max_depth {
            return;
        }

        let suffix = if self.is_leaf() || depth == 0 { "" } else { "/" };
        let new_prefix = if depth == 0 {
            out.push_str(&self.name);
            out.push('\n');
            prefix.to_string()
        } else {
            let connector = if is_last { "└── " } else { "├── " };
            out.push_str(&format!("{prefix}{connector}{}{suffix}\n", self.name));
            format!("{}{}", prefix, if is_last { "    " } else { "│   " })
        };

        let total = self.children.len();
        for (index, child) in self.children.values().enumerate() {
            child.render_into(out, depth + 1, max_depth, index == total - 1, &new_prefix);
        }
    }
}

/// Tree view over `/` separated names, such as those returned by
/// [`crate::PathRegistry::files`].
#[derive(Debug)]
pub struct DirectoryTree {
    root: TreeNode,
}

impl DirectoryTree {
    pub fn new(root_name: &str) -> Self {
        Self {
            root: TreeNode::named(root_name),
        }
    }

    pub fn from_names<I, S>(root_name: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new(root_name);
        for name in names {
            tree.add_path(name.as_ref());
        }
        tree
    }

    pub fn add_path(&mut self, path: &str) {
        let mut current = &mut self.root;
        for component in path.split('/').filter(|c| !c.is_empty() && *c != ".") {
            current = current
                .children
                .entry(component.to_string())
                .or_insert_with(|| TreeNode::named(component));
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Find the node at `path`; the empty path and `/` name the root.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        let mut current = &self.root;
        for component in path.split('/').filter(|c| !c.is_empty() && *c != ".") {
            current = current.children.get(component)?;
        }
        Some(current)
    }

    pub fn render(&self, max_depth: usize) -> String {
        self.root.render(max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find() {
        let tree = DirectoryTree::from_names("plugins", ["app/plugin.json", "app/img/logo.svg"]);

        let app = tree.find("app").unwrap();
        let names: Vec<_> = app.children().map(TreeNode::name).collect();
        assert_eq!(names, vec!["img", "plugin.json"]);
        assert!(tree.find("/app/plugin.json").unwrap().is_leaf());
        assert!(tree.find("app/missing").is_none());
        assert_eq!(tree.find("/").unwrap().name(), "plugins");
    }

    #[test]
    fn test_render() {
        let tree = DirectoryTree::from_names(
            "plugins",
            ["app/plugin.json", "app/img/logo.svg", "README.md"],
        );

        let expected = "\
plugins
├── README.md
└── app/
    ├── img/
    │   └── logo.svg
    └── plugin.json
";
        assert_eq!(tree.render(3), expected);
    }

    #[test]
    fn test_render_respects_depth() {
        let tree = DirectoryTree::from_names("plugins", ["app/img/logo.svg"]);
        assert_eq!(tree.render(1), "plugins\n└── app/\n");
    }
}
