use std::io::{self, Write};

use room_finder::{
    ScheduleDocument, Weekday, ingest_dir, load_document_from_json, query, save_document_to_json,
};

fn print_help() {
    println!(
        "Commands:\n  help                       Show this help\n  parse <dir>                Normalize every *.csv in a directory\n  save <path>                Save the schedule document as JSON\n  load <path>                Load a schedule document from JSON\n  rooms                      List all known rooms\n  check <day> <HH:MM>        Show available/occupied rooms at a time\n  room <name...>             Show one room's full week schedule\n  summary                    Show document counts\n  quit|exit                  Exit"
    );
}

fn print_summary(document: &ScheduleDocument) {
    println!("Rooms  : {}", document.room_list.len());
    println!("Courses: {}", document.courses.len());
}

fn print_rooms(document: &ScheduleDocument) {
    for room in &document.room_list {
        println!("  {room}");
    }
    println!("Total rooms: {}", document.room_list.len());
}

fn print_availability(document: &ScheduleDocument, day_s: &str, time_s: &str) {
    let (day, time) = match query::parse_query(day_s, time_s) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };
    let report = query::availability(document, day, time);
    println!(
        "{day} {time}: {} available, {} occupied (of {} rooms)",
        report.summary.available, report.summary.occupied, report.summary.total_rooms
    );
    println!("Available:");
    for entry in &report.available_rooms {
        match &entry.next_class {
            Some(next) => println!(
                "  {} (next: {} at {})",
                entry.room, next.course, next.start_time
            ),
            None => println!("  {} (free for the rest of the day)", entry.room),
        }
    }
    println!("Occupied:");
    for entry in &report.occupied_rooms {
        println!(
            "  {}: {} until {}",
            entry.room, entry.current_class.course, entry.current_class.end_time
        );
    }
}

fn print_room_week(document: &ScheduleDocument, room: &str) {
    let week = match query::room_week(document, room) {
        Ok(week) => week,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };
    println!("Schedule for {room}:");
    for day in Weekday::ALL {
        let slots = week.day(day);
        if slots.is_empty() {
            println!("  {day}: -");
            continue;
        }
        println!("  {day}:");
        for slot in slots {
            println!(
                "    {}-{} {} ({})",
                slot.start_time, slot.end_time, slot.course, slot.section
            );
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut document = ScheduleDocument::default();

    println!("Room Finder (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "summary" => print_summary(&document),
            "rooms" => print_rooms(&document),
            "parse" => match parts.next() {
                Some(dir) => match ingest_dir(dir) {
                    Ok((parsed, summary)) => {
                        document = parsed;
                        println!(
                            "Parsed {} file(s): {} courses kept, {} rows skipped, {} file(s) failed.",
                            summary.files_read,
                            summary.courses_kept,
                            summary.rows_skipped,
                            summary.files_failed
                        );
                        print_summary(&document);
                    }
                    Err(e) => println!("Error parsing {dir}: {e}"),
                },
                None => println!("Usage: parse <dir>"),
            },
            "save" => match parts.next() {
                Some(path) => match save_document_to_json(&document, path) {
                    Ok(_) => println!("Schedule data saved to {path}."),
                    Err(e) => println!("Error saving schedule data: {e}"),
                },
                None => println!("Usage: save <path>"),
            },
            "load" => match parts.next() {
                Some(path) => match load_document_from_json(path) {
                    Ok(loaded) => {
                        document = loaded;
                        println!("Schedule data loaded from {path}.");
                        print_summary(&document);
                    }
                    Err(e) => println!("Error loading schedule data: {e}"),
                },
                None => println!("Usage: load <path>"),
            },
            "check" => {
                let day_s = parts.next();
                let time_s = parts.next();
                match (day_s, time_s) {
                    (Some(day_s), Some(time_s)) => print_availability(&document, day_s, time_s),
                    _ => println!("Usage: check <day> <HH:MM>"),
                }
            }
            "room" => {
                let rest: Vec<&str> = parts.collect();
                if rest.is_empty() {
                    println!("Usage: room <name...>");
                    continue;
                }
                let name = rest.join(" ");
                print_room_week(&document, &name);
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
