//! Built-in sample forest used when no outline file is given.

use super::tree::NodeSpec;

/// The demo grocery hierarchy, everything collapsed.
pub fn sample_forest() -> Vec<NodeSpec> {
    vec![
        NodeSpec::branch(
            "Fruits",
            vec![
                NodeSpec::leaf("Apple"),
                NodeSpec::leaf("Banana"),
                NodeSpec::branch(
                    "Citrus",
                    vec![NodeSpec::leaf("Orange"), NodeSpec::leaf("Lemon")],
                ),
            ],
        ),
        NodeSpec::branch(
            "Vegetables",
            vec![NodeSpec::leaf("Carrot"), NodeSpec::leaf("Broccoli")],
        ),
    ]
}
