//! Noyau : évaluation (pipeline réel)
//!
//! texte -> jetons (notations lues) -> valeur de chaque opérande (de l’intérieur
//!       vers l’extérieur) -> réduction gauche->droite SANS priorité -> format
//!
//! Politique de repli : nombre illisible, jeton mal placé, division par zéro,
//! domaine invalide, résultat non fini => 0, en silence. Seule une imbrication
//! au-delà du garde-fou (ErreurCalcul) donne l’affichage "Error".

use super::erreur::ErreurCalcul;
use super::expr::{Operande, PROFONDEUR_MAX};
use super::fonctions::{appliquer, valeur_constante};
use super::format::format_resultat;
use super::jetons::{tokenize, Jeton};

/// Texte affiché quand l’évaluation échoue.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Résultat d’évaluation prêt à afficher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub affichage: String,
    pub erreur: bool,
}

impl Evaluation {
    fn depuis(resultat: Result<f64, ErreurCalcul>) -> Self {
        match resultat {
            Ok(x) => Self {
                affichage: format_resultat(x),
                erreur: false,
            },
            Err(e) => {
                tracing::warn!("évaluation impossible: {e}");
                Self {
                    affichage: AFFICHAGE_ERREUR.to_string(),
                    erreur: true,
                }
            }
        }
    }
}

/// API publique : évalue un texte d’expression. Ne panique jamais et renvoie
/// toujours un texte affichable.
pub fn eval_expression(expr_str: &str) -> Evaluation {
    let resultat = tokenize(expr_str).and_then(|e| eval_jetons(e.jetons()));
    let evaluation = Evaluation::depuis(resultat);
    tracing::debug!(expression = expr_str, resultat = %evaluation.affichage, "eval");
    evaluation
}

/// Évalue le résultat d’un calcul déjà structuré (utilisé par la saisie).
pub(crate) fn evaluer_pour_affichage(jetons: &[Jeton]) -> Evaluation {
    Evaluation::depuis(eval_jetons(jetons))
}

/// Réduction plate, strictement de gauche à droite : "2 + 3 * 4" = (2+3)*4.
///
/// On lit des paires (opérateur, opérande) après la première valeur :
/// - suite vide : 0
/// - opérateur en première place : 0 ("+ 2" = 0)
/// - opérande à la place d’un opérateur : la paire est ignorée ("2 3" = 2)
/// - opérateur à la place d’une opérande : vaut 0 ("2 + * 3" = 2)
/// - opérande finale manquante ("3 + ") : 0
///
/// Seul le garde-fou de profondeur peut échouer.
pub fn eval_jetons(jetons: &[Jeton]) -> Result<f64, ErreurCalcul> {
    let (premier, reste) = match jetons.split_first() {
        None => return Ok(0.0),
        Some(x) => x,
    };

    let mut acc = valeur_jeton(premier)?;

    for paire in reste.chunks(2) {
        let op = match &paire[0] {
            Jeton::Operateur(op) => *op,
            Jeton::Operande(_) => continue,
        };

        let b = match paire.get(1) {
            Some(jeton) => valeur_jeton(jeton)?,
            None => 0.0,
        };

        acc = op.appliquer(acc, b);
    }

    Ok(acc)
}

/// Valeur d’un jeton en place d’opérande (un opérateur y vaut 0).
fn valeur_jeton(jeton: &Jeton) -> Result<f64, ErreurCalcul> {
    match jeton {
        Jeton::Operande(op) => valeur_operande(op),
        Jeton::Operateur(_) => Ok(0.0),
    }
}

/// Valeur numérique d’une opérande (notations évaluées récursivement).
pub fn valeur_operande(op: &Operande) -> Result<f64, ErreurCalcul> {
    valeur_a_profondeur(op, 0)
}

fn valeur_a_profondeur(op: &Operande, profondeur: usize) -> Result<f64, ErreurCalcul> {
    if profondeur > PROFONDEUR_MAX {
        return Err(ErreurCalcul::ProfondeurExcessive(PROFONDEUR_MAX));
    }

    Ok(match op {
        Operande::Saisie(t) => lire_nombre(t),
        Operande::Constante(c) => valeur_constante(*c),
        Operande::Notation(f, x) => appliquer(*f, valeur_a_profondeur(x, profondeur + 1)?),
    })
}

/// Texte tapé -> f64. Illisible (ou non fini : "inf", "NaN") => 0.
fn lire_nombre(t: &str) -> f64 {
    t.parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .unwrap_or(0.0)
}
