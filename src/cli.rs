// src/cli.rs
//
// Ligne de commande (natif seulement).
// - sans option      : fenêtre egui
// - --eval "<expr>"  : évaluation sans fenêtre, affichage sur stdout
// - --config <PATH>  : fichier de réglages à la place du chemin par défaut

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::noyau::eval_expression;

#[derive(Parser, Debug)]
#[command(name = "calculatrice-scientifique")]
#[command(about = "Calculatrice scientifique (évaluation gauche -> droite, trig en degrés)")]
pub struct Cli {
    /// Fichier de réglages (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Évalue l’expression, affiche le résultat et quitte
    #[arg(long, value_name = "EXPRESSION", allow_hyphen_values = true)]
    pub eval: Option<String>,
}

/// Mode --eval : même rendu que l’écran ; code 1 si "Error".
pub fn evaluer_en_ligne(expression: &str) -> ExitCode {
    let e = eval_expression(expression);
    println!("{}", e.affichage);
    if e.erreur {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
