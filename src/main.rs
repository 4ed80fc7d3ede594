// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::{env, process};

enum StartupAction {
    LaunchApp,
    PrintHelp,
    UsageError(String),
}

fn main() {
    match parse_startup_action(env::args().skip(1).collect()) {
        StartupAction::PrintHelp => {
            print_help();
            process::exit(0);
        }
        StartupAction::UsageError(message) => {
            eprintln!("{message}\n");
            print_help();
            process::exit(2);
        }
        StartupAction::LaunchApp => chatdock_lib::run(),
    }
}

fn parse_startup_action(args: Vec<String>) -> StartupAction {
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return StartupAction::PrintHelp,
            "--widget-url" => {
                let Some(value) = args.next() else {
                    return StartupAction::UsageError(
                        "--widget-url requires a value".to_string(),
                    );
                };
                env::set_var(chatdock_lib::WIDGET_URL_ENV, value);
            }
            other => return StartupAction::UsageError(format!("Unknown argument: {other}")),
        }
    }

    StartupAction::LaunchApp
}

fn print_help() {
    println!("Chatdock - desktop launcher for an embedded web chat widget");
    println!();
    println!("Usage: chatdock [options]");
    println!();
    println!("Options:");
    println!("  --widget-url <url>  Load the chat widget from <url> instead of the default");
    println!("  -h, --help          Print this help text");
}
