use jpat::{
    rowan::{NodeOrToken, TextRange},
    syntax::SyntaxElement,
    Locatable,
};
use serde::Serialize;

use crate::{args::ParseCommand, Context};

#[derive(Debug, Serialize)]
struct Output {
    tree: TreeNode,
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Serialize)]
struct TreeNode {
    kind: String,
    start: u32,
    end: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(element: SyntaxElement) -> Self {
        let kind = format!("{:?}", element.kind());
        let range = element.text_range();
        match element {
            NodeOrToken::Node(node) => TreeNode {
                kind,
                children: node.children_with_tokens().map(TreeNode::new).collect(),
                ..TreeNode::located(range)
            },
            NodeOrToken::Token(token) => TreeNode {
                kind,
                text: Some(token.text().to_owned()),
                ..TreeNode::located(range)
            },
        }
    }

    fn located(range: TextRange) -> Self {
        TreeNode {
            kind: String::new(),
            start: range.start().into(),
            end: range.end().into(),
            text: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorItem {
    message: String,
    start: u32,
    end: u32,
}

impl Context {
    pub fn execute_parse(&mut self, cmd: ParseCommand) -> Result<i32, anyhow::Error> {
        let parse = self.parse_input(&cmd.input)?;
        if cmd.json {
            let output = Output {
                tree: TreeNode::new(NodeOrToken::Node(parse.syntax())),
                errors: parse
                    .errors()
                    .iter()
                    .map(|error| ErrorItem {
                        message: error.kind.to_string(),
                        start: error.range().start().into(),
                        end: error.range().end().into(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print!("{}", parse.debug_tree());
            if !parse.errors().is_empty() {
                eprintln!("{}", parse.diagnostics());
            }
        }
        Ok(0)
    }
}
