//! Skeleton display command

use anyhow::{Context, Result};
use clap::Args;
use isl_avatar::{JointId, Skeleton};

use crate::utils::{NodeType, TreeNode, TreeOptions, render_tree};

#[derive(Debug, Clone, Args)]
pub struct SkeletonArgs {
    /// Maximum depth to display
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Hide rest positions
    #[arg(long)]
    pub no_positions: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

pub fn execute(args: &SkeletonArgs) -> Result<()> {
    let skeleton = Skeleton::new();
    skeleton
        .validate()
        .context("Skeleton failed its hierarchy checks")?;

    let options = TreeOptions {
        max_depth: args.depth,
        no_color: args.no_color,
        show_metadata: !args.no_positions,
    };

    print!("{}", render_tree(&joint_tree(&skeleton, JointId::Hip), &options));
    println!("{} joints", skeleton.len());

    Ok(())
}

/// Build the display tree below `id`
pub fn joint_tree(skeleton: &Skeleton, id: JointId) -> TreeNode {
    let joint = skeleton.joint(id);
    let node_type = if joint.is_root() {
        NodeType::Root
    } else if joint.children.is_empty() {
        NodeType::Effector
    } else {
        NodeType::Joint
    };

    let p = joint.rest.position;
    let node = TreeNode::new(joint.name(), node_type)
        .with_metadata("rest", &format!("({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));

    joint
        .children
        .iter()
        .fold(node, |node, &child| node.add_child(joint_tree(skeleton, child)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_tree_covers_skeleton() {
        fn count(node: &TreeNode) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }

        let skeleton = Skeleton::new();
        let tree = joint_tree(&skeleton, JointId::Hip);
        assert_eq!(tree.node_type, NodeType::Root);
        assert_eq!(count(&tree), skeleton.len());
    }

    #[test]
    fn test_rendered_tree_shows_rest_positions() {
        let skeleton = Skeleton::new();
        let options = TreeOptions {
            no_color: true,
            show_metadata: true,
            ..TreeOptions::default()
        };
        let output = render_tree(&joint_tree(&skeleton, JointId::Hip), &options);

        assert!(output.starts_with("◉ hip [rest: (0.00, 0.90, 0.00)]"));
        assert!(output.contains("○ right_hand [rest: (0.80, 0.70, 0.00)]"));
    }
}
