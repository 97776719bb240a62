/// Lexicon Linter — validates deficit phrase coverage and vocabulary quality.
///
/// Usage: lexicon_linter [--phrases <file>] [--vocabulary <file>] [--taxonomy <file>]
///
/// With no arguments, lints the lexicon and catalog bundled with the crate.

use chartnote::lexicon::{Lexicon, NarrativeVocabulary};
use chartnote::schema::taxonomy::ActivityCatalog;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        process::exit(0);
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
                process::exit(1);
            }
        }
        i += 1;
    }

    let lexicon = match (&phrases_path, &vocabulary_path) {
        (Some(phrases), Some(vocabulary)) => {
            match Lexicon::load_from_ron(Path::new(phrases), Path::new(vocabulary)) {
                Ok(lexicon) => lexicon,
                Err(e) => {
                    eprintln!("ERROR: Failed to load lexicon: {}", e);
                    process::exit(1);
                }
            }
        }
        (None, None) => match Lexicon::standard() {
            Ok(lexicon) => lexicon,
            Err(e) => {
                eprintln!("ERROR: Failed to load bundled lexicon: {}", e);
                process::exit(1);
            }
        },
        _ => {
            eprintln!("ERROR: --phrases and --vocabulary must be given together");
            process::exit(1);
        }
    };

    let catalog = match &taxonomy_path {
        Some(path) => match ActivityCatalog::load_from_ron(Path::new(path)) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("ERROR: Failed to load taxonomy: {}", e);
                process::exit(1);
            }
        },
        None => match ActivityCatalog::builtin() {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("ERROR: Failed to load bundled taxonomy: {}", e);
                process::exit(1);
            }
        },
    };

    println!(
        "Loaded {} deficit phrases, {} activities",
        lexicon.deficit_phrases.len(),
        catalog.activities.len()
    );

    let (errors, warnings) = lint(&lexicon, &catalog);

    println!("\n=== Lexicon Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint(lexicon: &Lexicon, catalog: &ActivityCatalog) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Coverage: every deficit key the catalog suggests should resolve to
    // a phrase. Unmapped keys pass through verbatim, which reads poorly.
    for deficit in catalog.referenced_deficits() {
        if !lexicon.deficit_phrases.contains_key(deficit) {
            warnings.push(format!(
                "Deficit key '{}' has no clinical phrase and will pass through verbatim",
                deficit
            ));
        }
    }

    // Empty word lists blank out parts of sentences.
    for (name, list) in vocabulary_lists(&lexicon.vocabulary) {
        if list.is_empty() {
            errors.push(format!("Vocabulary list '{}' is empty", name));
        }
        for word in list {
            if word.trim().is_empty() {
                errors.push(format!("Vocabulary list '{}' contains a blank entry", name));
            }
        }
    }

    // Phrase quality checks
    for (key, phrase) in &lexicon.deficit_phrases {
        if phrase.trim().is_empty() {
            errors.push(format!("Deficit key '{}' maps to an empty phrase", key));
        } else if phrase.ends_with('.') {
            warnings.push(format!(
                "Phrase for '{}' ends with a period; the composer adds its own punctuation",
                key
            ));
        }
    }

    // Duplicate activity ids break find_activity.
    let mut seen_ids = std::collections::HashSet::new();
    for activity in &catalog.activities {
        if !seen_ids.insert(activity.id.as_str()) {
            errors.push(format!("Duplicate activity id '{}'", activity.id));
        }
        if activity.billing_code.trim().is_empty() {
            errors.push(format!("Activity '{}' has no billing code", activity.id));
        }
    }

    (errors, warnings)
}

fn vocabulary_lists(vocab: &NarrativeVocabulary) -> [(&'static str, &Vec<String>); 6] {
    [
        ("patient_verbs", &vocab.patient_verbs),
        ("therapist_verbs", &vocab.therapist_verbs),
        ("cause_connectors", &vocab.cause_connectors),
        ("effect_connectors", &vocab.effect_connectors),
        ("goal_connectors", &vocab.goal_connectors),
        ("descriptors", &vocab.descriptors),
    ]
}

fn print_usage() {
    println!("Usage: lexicon_linter [--phrases <file>] [--vocabulary <file>] [--taxonomy <file>]");
    println!();
    println!("  --phrases <file>     Deficit phrase map RON (requires --vocabulary)");
    println!("  --vocabulary <file>  Narrative vocabulary RON (requires --phrases)");
    println!("  --taxonomy <file>    Activity catalog RON (default: bundled)");
}
