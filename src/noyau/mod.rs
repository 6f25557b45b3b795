//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - expr.rs      : opérandes + notations (sin(x), √(x), x!, …) et leur relecture
//! - jetons.rs    : opérateurs, suite de jetons, tokenisation du texte
//! - fonctions.rs : valeurs des fonctions (degrés, domaines, factorielle exacte)
//! - format.rs    : affichage du résultat (arrondi 10 décimales)
//! - eval.rs      : pipeline complet (texte -> valeur -> affichage)
//! - saisie.rs    : machine à états touche par touche
//! - erreur.rs    : fautes de structure

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod saisie;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::eval_expression;
pub use jetons::Operateur;
pub use saisie::{Calculatrice, Commande, Notifications, Scientifique};
