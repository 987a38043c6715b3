// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

//! Flowboard CLI entrypoint.
//!
//! Runs the interactive TUI on a graph file. The graph path is optional; with
//! no file (or with `--demo`) the editor starts on the built-in demo graph.
//! Preferences persist separately and are saved when the shell exits.

use std::error::Error;
use std::path::PathBuf;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<graph.json>] [--prefs <path>]\n  {program} --demo [--prefs <path>]\n\nOpens the graph file if it exists, otherwise starts from the demo graph and\ncreates the file on first save. --demo skips file loading entirely and cannot\nbe combined with a graph path.\n\n--prefs selects the preferences file (default `flowboard-prefs.json` in the\ncurrent directory)."
    );
}

const DEFAULT_PREFS_FILE: &str = "flowboard-prefs.json";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    graph_path: Option<String>,
    prefs_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--prefs" => {
                if options.prefs_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.prefs_path = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.graph_path.is_some() {
                    return Err(());
                }
                options.graph_path = Some(arg);
            }
        }
    }

    if options.demo && options.graph_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "flowboard".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let prefs_path =
            PathBuf::from(options.prefs_path.unwrap_or_else(|| DEFAULT_PREFS_FILE.to_owned()));
        let prefs = flowboard::store::load_prefs(&prefs_path)?;

        let (graph, graph_path) = if options.demo {
            (flowboard::model::fixtures::demo_graph(), None)
        } else {
            match options.graph_path.map(PathBuf::from) {
                Some(path) => {
                    let graph = flowboard::store::load_graph_if_exists(&path)?
                        .unwrap_or_else(flowboard::model::fixtures::demo_graph);
                    (graph, Some(path))
                }
                None => (flowboard::model::fixtures::demo_graph(), None),
            }
        };

        let editor = flowboard::ops::Editor::new(graph);
        let prefs = flowboard::tui::run(editor, prefs, graph_path)?;
        flowboard::store::save_prefs(&prefs_path, &prefs)?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("flowboard: {err}");
        std::process::exit(1);
    }
}
