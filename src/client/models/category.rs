//! Category tree model and path flattening
//!
//! The categories endpoint returns a nested tree where inner nodes are
//! categories and leaves are either empty categories or posts. Flattening
//! turns that tree into one `a/b/c/` path per terminal category.

use serde::{Deserialize, Serialize};

/// Response envelope of the categories endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Categories {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub categories: Vec<Category>,
}

/// A node in the category tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,

    /// Set when the node is a post rather than a subcategory
    #[serde(default)]
    pub post: bool,

    /// Number of posts below this category (absent on post nodes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Category>,
}

impl Category {
    /// Every terminal category path reachable from this node, in child order.
    ///
    /// Post nodes contribute nothing, even if they carry children. A category
    /// without children yields its own `name/`.
    pub fn paths(&self) -> Vec<String> {
        if self.post {
            return Vec::new();
        }
        if self.children.is_empty() {
            return vec![format!("{}/", self.name)];
        }

        self.children
            .iter()
            .flat_map(Category::paths)
            .map(|sub| format!("{}/{}", self.name, sub))
            .collect()
    }
}

#[cfg(test)]
impl Category {
    /// Create an empty category node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            post: false,
            count: None,
            children: Vec::new(),
        }
    }

    /// Create a post leaf.
    pub fn post(name: impl Into<String>) -> Self {
        Self {
            post: true,
            ..Self::new(name)
        }
    }

    /// Append a child node.
    pub fn with_child(mut self, child: Category) -> Self {
        self.children.push(child);
        self
    }
}

/// Flatten a list of top-level categories into paths, preserving order.
pub fn flatten_categories(categories: &[Category]) -> Vec<String> {
    categories.iter().flat_map(Category::paths).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_category_emits_own_path() {
        assert_eq!(Category::new("A").paths(), vec!["A/"]);
    }

    #[test]
    fn test_nested_chain_yields_full_prefix() {
        let tree = Category::new("A").with_child(Category::new("B").with_child(Category::new("C")));

        assert_eq!(tree.paths(), vec!["A/B/C/"]);
    }

    #[test]
    fn test_post_node_yields_nothing() {
        assert!(Category::post("README").paths().is_empty());
    }

    #[test]
    fn test_post_flag_takes_precedence_over_children() {
        let odd = Category::post("doc").with_child(Category::new("child"));

        assert!(odd.paths().is_empty());
    }

    #[test]
    fn test_sibling_order_is_preserved() {
        let tree = Category::new("root")
            .with_child(Category::new("z"))
            .with_child(Category::new("a"))
            .with_child(Category::new("m").with_child(Category::new("x")));

        assert_eq!(tree.paths(), vec!["root/z/", "root/a/", "root/m/x/"]);
    }

    #[test]
    fn test_category_with_only_posts_yields_nothing() {
        // The posts are reported through the posts API, not as directories.
        let tree = Category::new("notes")
            .with_child(Category::post("one"))
            .with_child(Category::post("two"));

        assert!(tree.paths().is_empty());
    }

    #[test]
    fn test_posts_mixed_with_subcategories() {
        let tree = Category::new("dev")
            .with_child(Category::post("intro"))
            .with_child(Category::new("api"))
            .with_child(Category::post("outro"));

        assert_eq!(tree.paths(), vec!["dev/api/"]);
    }

    #[test]
    fn test_flatten_concatenates_top_level_in_order() {
        let roots = vec![
            Category::new("b").with_child(Category::new("1")),
            Category::post("loose"),
            Category::new("a"),
        ];

        assert_eq!(flatten_categories(&roots), vec!["b/1/", "a/"]);
    }

    #[test]
    fn test_flatten_empty_input() {
        assert!(flatten_categories(&[]).is_empty());
    }

    #[test]
    fn test_null_children_decode_as_leaf() {
        let json = r#"{"categories": [
            { "name": "a", "post": true, "children": null },
            { "name": "b", "children": null },
            { "name": "c", "children": [ { "name": "d", "children": null } ] }
        ]}"#;

        let decoded: Categories = serde_json::from_str(json).unwrap();

        assert!(decoded.categories[1].children.is_empty());
        assert_eq!(flatten_categories(&decoded.categories), vec!["b/", "c/d/"]);
    }

    #[test]
    fn test_null_category_list_is_empty() {
        let decoded: Categories = serde_json::from_str(r#"{"categories": null}"#).unwrap();
        assert!(decoded.categories.is_empty());
    }

    #[test]
    fn test_decoded_fixture_flattens_to_expected_paths() {
        let json = r#"{
          "categories": [
            {
              "name": "日報",
              "count": 4,
              "children": [
                {
                  "name": "2015",
                  "count": 4,
                  "children": [
                    {
                      "name": "05",
                      "count": 4,
                      "children": [
                        { "name": "09", "count": 1, "children": [ { "name": "hi!", "post": true } ] },
                        { "name": "10", "count": 3, "children": [] }
                      ]
                    }
                  ]
                }
              ]
            },
            {
              "name": "dev",
              "count": 2,
              "children": [
                { "name": "api", "count": 1 },
                { "name": "Getting Started", "post": true },
                { "name": "infra", "count": 1, "children": [ { "name": "aws", "count": 1 } ] }
              ]
            },
            { "name": "Welcome to esa!", "post": true }
          ]
        }"#;

        let decoded: Categories = serde_json::from_str(json).unwrap();

        assert_eq!(decoded.categories[0].count, Some(4));
        // `日報/2015/05/09` only holds a post, so it has no terminal path.
        assert_eq!(
            flatten_categories(&decoded.categories),
            vec!["日報/2015/05/10/", "dev/api/", "dev/infra/aws/"]
        );
    }
}
