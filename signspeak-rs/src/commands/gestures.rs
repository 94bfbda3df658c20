//! Gesture catalog listing

use anyhow::Result;
use clap::Args;
use isl_avatar::{Avatar, GestureLibrary};
use prettytable::{Cell, Row, Table};

#[derive(Debug, Clone, Args)]
pub struct GesturesArgs {
    /// Include the A-Z fingerspelling letters
    #[arg(short, long)]
    pub alphabet: bool,

    /// Print names only, one per line
    #[arg(long)]
    pub names_only: bool,
}

pub fn execute(args: &GesturesArgs) -> Result<()> {
    let avatar = if args.alphabet {
        Avatar::with_alphabet()
    } else {
        Avatar::new()
    };

    if args.names_only {
        for name in avatar.gestures() {
            println!("{name}");
        }
        return Ok(());
    }

    gesture_table(avatar.library()).printstd();
    println!("{} gestures", avatar.library().len());

    Ok(())
}

/// One row per gesture: name, frame count, duration, animated joints
pub fn gesture_table(library: &GestureLibrary) -> Table {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(
        ["Gesture", "Frames", "Duration", "Joints"]
            .into_iter()
            .map(|h| Cell::new(h).style_spec("b"))
            .collect(),
    ));

    for gesture in library.iter() {
        let joints: Vec<&str> = gesture
            .animated_joints()
            .into_iter()
            .map(|id| id.as_str())
            .collect();

        table.add_row(Row::new(vec![
            Cell::new(gesture.name()),
            Cell::new(&gesture.frames().len().to_string()).style_spec("r"),
            Cell::new(&format!("{:.2}s", gesture.duration())).style_spec("r"),
            Cell::new(&joints.join(", ")),
        ]));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use isl_avatar::Skeleton;

    #[test]
    fn test_gesture_table_rows() {
        let library = GestureLibrary::new(&Skeleton::new());
        let table = gesture_table(&library);
        assert_eq!(table.len(), 10);

        let rendered = table.to_string();
        assert!(rendered.contains("THANK_YOU"));
        assert!(rendered.contains("2.50s"));
        assert!(rendered.contains("right_wrist, right_hand"));
    }
}
