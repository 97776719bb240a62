/// Preview — interactive session shell for testing the note composer.
///
/// Usage: preview [--phrases <file> --vocabulary <file>] [--taxonomy <file>]
///
/// Commands:
///   unit <activity_id> <assist> <task...>  — record a treatment unit
///   cue <level> <type> [focus,focus]       — attach a cue to the last unit
///   vitals <bp> <hr> <rr> <o2> <pain>      — set vitals ('-' skips a field)
///   minutes <code> <mins>                  — set billed minutes for a code
///   progress <improved|maintained|declined>
///   undo / redo                            — step unit history
///   compose                                — print the current note
///   save                                   — archive the current note
///   notes                                  — list archived notes
///   reset                                  — clear the session
///   help                                   — list commands
///   quit                                   — exit

use chartnote::lexicon::Lexicon;
use chartnote::schema::taxonomy::ActivityCatalog;
use chartnote::schema::unit::{encode_cue, AssistLevel, TreatmentUnit};
use chartnote::schema::vitals::ProgressTrend;
use chartnote::session::{NoteArchive, SessionRecorder};
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        return;
    }

    let mut phrases_path = None;
    let mut vocabulary_path = None;
    let mut taxonomy_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--phrases" if i + 1 < args.len() => {
                i += 1;
                phrases_path = Some(args[i].clone());
            }
            "--vocabulary" if i + 1 < args.len() => {
                i += 1;
                vocabulary_path = Some(args[i].clone());
            }
            "--taxonomy" if i + 1 < args.len() => {
                i += 1;
                taxonomy_path = Some(args[i].clone());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let lexicon = match (&phrases_path, &vocabulary_path) {
        (Some(p), Some(v)) => Lexicon::load_from_ron(Path::new(p), Path::new(v)),
        _ => Lexicon::standard(),
    };
    let lexicon = match lexicon {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("ERROR: Failed to load lexicon: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = match &taxonomy_path {
        Some(path) => ActivityCatalog::load_from_ron(Path::new(path)),
        None => ActivityCatalog::builtin(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("ERROR: Failed to load taxonomy: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {} deficit phrases, {} activities",
        lexicon.deficit_phrases.len(),
        catalog.activities.len()
    );
    println!("Type 'help' for commands.\n");

    let mut recorder = SessionRecorder::new();
    let mut archive = NoteArchive::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help(&catalog);
            }
            "unit" => {
                if parts.len() < 4 {
                    println!("Usage: unit <activity_id> <assist> <task...>");
                    println!("  assist: Dep, \"Max A\", \"Mod A\", \"Min A\", CGA, SBA, \"Mod I\", Indep");
                    println!("  (multi-word assist levels use their short form: maxa, moda, mina, modi)");
                    continue;
                }
                let activity = match catalog.find_activity(&parts[1].to_uppercase()) {
                    Some(activity) => activity,
                    None => {
                        println!("Unknown activity id: {}", parts[1]);
                        continue;
                    }
                };
                let assist = match parse_assist(parts[2]) {
                    Some(assist) => assist,
                    None => {
                        println!("Unknown assist level: {}", parts[2]);
                        continue;
                    }
                };
                let task = parts[3..].join(" ");
                let deficits = suggested_deficits(&catalog, &activity.id, &task);

                recorder.record(TreatmentUnit {
                    activity: activity.label.clone(),
                    billing_code: activity.billing_code.clone(),
                    phase: String::new(),
                    task: task.clone(),
                    assist,
                    cues: Vec::new(),
                    deficits,
                    params: None,
                });
                println!("Recorded '{}' ({} units total)", task, recorder.units().len());
            }
            "cue" => {
                if parts.len() < 3 {
                    println!("Usage: cue <level> <type> [focus,focus,...]");
                    continue;
                }
                let focuses: Vec<&str> = if parts.len() > 3 {
                    parts[3]
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .collect()
                } else {
                    Vec::new()
                };
                let cue = encode_cue(parts[1], parts[2], &focuses);
                // Rebuild the last unit with the cue so undo stays consistent.
                let Some(last) = recorder.units().last().cloned() else {
                    println!("No units recorded yet.");
                    continue;
                };
                let mut updated = last;
                updated.cues.push(cue.clone());
                if !recorder.undo() {
                    println!("No units recorded yet.");
                    continue;
                }
                recorder.record(updated);
                println!("Attached cue '{}'", cue);
            }
            "vitals" => {
                if parts.len() < 6 {
                    println!("Usage: vitals <bp> <hr> <rr> <o2> <pain>  ('-' skips a field)");
                    continue;
                }
                let field = |s: &str| {
                    if s == "-" {
                        None
                    } else {
                        Some(s.to_string())
                    }
                };
                recorder.vitals.blood_pressure = field(parts[1]);
                recorder.vitals.heart_rate = field(parts[2]);
                recorder.vitals.resp_rate = field(parts[3]);
                recorder.vitals.oxygen_sat = field(parts[4]);
                recorder.vitals.pain = field(parts[5]);
                println!("Vitals set.");
            }
            "minutes" => {
                if parts.len() < 3 {
                    println!("Usage: minutes <code> <mins>");
                    println!("  Codes in session: {:?}", recorder.billing_codes());
                    continue;
                }
                recorder.set_minutes(parts[1], parts[2]);
                println!("{} -> {} mins", parts[1], parts[2]);
            }
            "progress" => {
                if parts.len() < 2 {
                    println!("Current: {}", recorder.progress.label());
                    continue;
                }
                match parse_trend(parts[1]) {
                    Some(trend) => {
                        recorder.progress = trend;
                        println!("Progress set to {}", trend.label());
                    }
                    None => println!("Unknown trend: {}", parts[1]),
                }
            }
            "undo" => {
                if recorder.undo() {
                    println!("Undone ({} units)", recorder.units().len());
                } else {
                    println!("Nothing to undo.");
                }
            }
            "redo" => {
                if recorder.redo() {
                    println!("Redone ({} units)", recorder.units().len());
                } else {
                    println!("Nothing to redo.");
                }
            }
            "compose" => {
                println!("\n--- Generated Note ---");
                println!("{}", recorder.compose(&lexicon));
                println!("--- End ---\n");
            }
            "save" => {
                let text = recorder.compose(&lexicon);
                archive.save(&recorder, &text);
                println!("Saved ({} notes archived)", archive.notes().len());
            }
            "notes" => {
                if archive.notes().is_empty() {
                    println!("No archived notes.");
                }
                for note in archive.notes() {
                    println!("  [{}] {}", note.saved_at.format("%Y-%m-%d %H:%M"), note.preview);
                }
            }
            "reset" => {
                recorder.reset();
                println!("Session cleared.");
            }
            _ => {
                println!("Unknown command: '{}'. Type 'help' for available commands.", cmd);
            }
        }
    }
}

fn parse_trend(s: &str) -> Option<ProgressTrend> {
    match s.to_lowercase().as_str() {
        "improved" => Some(ProgressTrend::Improved),
        "maintained" => Some(ProgressTrend::Maintained),
        "declined" => Some(ProgressTrend::Declined),
        _ => None,
    }
}

fn parse_assist(s: &str) -> Option<AssistLevel> {
    match s.to_lowercase().as_str() {
        "dep" => Some(AssistLevel::Dep),
        "maxa" | "max" => Some(AssistLevel::MaxA),
        "moda" | "mod" => Some(AssistLevel::ModA),
        "mina" | "min" => Some(AssistLevel::MinA),
        "cga" => Some(AssistLevel::Cga),
        "sba" => Some(AssistLevel::Sba),
        "modi" => Some(AssistLevel::ModI),
        "indep" | "i" => Some(AssistLevel::Indep),
        other => AssistLevel::parse(other),
    }
}

/// Deficits suggested by the catalog for a matching subtask name, if any.
fn suggested_deficits(catalog: &ActivityCatalog, activity_id: &str, task: &str) -> Vec<String> {
    let Some(activity) = catalog.find_activity(activity_id) else {
        return Vec::new();
    };
    for phase in &activity.phases {
        for subtask in &phase.subtasks {
            if subtask.name.eq_ignore_ascii_case(task) {
                return subtask.deficits.clone();
            }
        }
    }
    Vec::new()
}

fn print_usage() {
    println!("Preview — interactive session shell for testing the note composer.");
    println!();
    println!("Usage: preview [--phrases <file> --vocabulary <file>] [--taxonomy <file>]");
    println!();
    println!("  --phrases <file>     Deficit phrase map RON (requires --vocabulary)");
    println!("  --vocabulary <file>  Narrative vocabulary RON (requires --phrases)");
    println!("  --taxonomy <file>    Activity catalog RON (default: bundled)");
}

fn print_help(catalog: &ActivityCatalog) {
    println!("Commands:");
    println!("  unit <activity_id> <assist> <task...>  Record a treatment unit");
    println!("  cue <level> <type> [focus,...]         Attach a cue to the last unit");
    println!("  vitals <bp> <hr> <rr> <o2> <pain>      Set vitals ('-' skips a field)");
    println!("  minutes <code> <mins>                  Set billed minutes for a code");
    println!("  progress <improved|maintained|declined>");
    println!("  undo / redo                            Step unit history");
    println!("  compose                                Print the current note");
    println!("  save / notes                           Archive and list notes");
    println!("  reset                                  Clear the session");
    println!("  help                                   Show this help");
    println!("  quit                                   Exit");
    println!();
    println!("Activity ids:");
    for activity in &catalog.activities {
        println!("  {:<12} {}", activity.id, activity.label);
    }
}
