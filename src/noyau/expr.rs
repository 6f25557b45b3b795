// src/noyau/expr.rs
//
// Opérandes structurées.
// - Saisie     : texte tapé tel quel ("12", "0.", "-5"), lu en f64 à l’évaluation
// - Constante  : π, e
// - Notation   : fonction en attente autour d’une autre opérande (sin(30), (5)², 5!)
//
// Le texte affiché est un RENDU de cette structure (Display), et
// `lire_operande` en est l’inverse : rendu puis relecture redonnent la même
// opérande. Les notations s’emboîtent librement (sin(cos(30)), |(5)²|, …).

use std::fmt;

use super::erreur::ErreurCalcul;

/// Garde-fou : profondeur max d’imbrication des notations (lecture + évaluation).
pub const PROFONDEUR_MAX: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Racine, // √(x)
    Exp,
    Carre,       // (x)²
    Factorielle, // x!
    Inverse,     // 1/(x)
    Abs,         // |x|
    Oppose,      // -(x)
    Pourcentage, // x%
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constante {
    Pi,
    E,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Operande {
    Saisie(String),
    Constante(Constante),
    Notation(Fonction, Box<Operande>),
}

/// Formes préfixées "nom(" … ")" (la parenthèse fermante termine le texte).
const PREFIXES: [(&str, Fonction); 9] = [
    ("sin(", Fonction::Sin),
    ("cos(", Fonction::Cos),
    ("tan(", Fonction::Tan),
    ("log(", Fonction::Log),
    ("ln(", Fonction::Ln),
    ("√(", Fonction::Racine),
    ("exp(", Fonction::Exp),
    ("1/(", Fonction::Inverse),
    ("-(", Fonction::Oppose),
];

impl Operande {
    pub fn saisie(texte: impl Into<String>) -> Self {
        Operande::Saisie(texte.into())
    }

    /// Enveloppe l’opérande dans une notation.
    pub fn envelopper(self, f: Fonction) -> Self {
        Operande::Notation(f, Box::new(self))
    }
}

impl fmt::Display for Constante {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constante::Pi => write!(f, "π"),
            Constante::E => write!(f, "e"),
        }
    }
}

impl fmt::Display for Operande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operande::Saisie(t) => write!(f, "{t}"),
            Operande::Constante(c) => write!(f, "{c}"),
            Operande::Notation(fonction, x) => match fonction {
                Fonction::Sin => write!(f, "sin({x})"),
                Fonction::Cos => write!(f, "cos({x})"),
                Fonction::Tan => write!(f, "tan({x})"),
                Fonction::Log => write!(f, "log({x})"),
                Fonction::Ln => write!(f, "ln({x})"),
                Fonction::Racine => write!(f, "√({x})"),
                Fonction::Exp => write!(f, "exp({x})"),
                Fonction::Carre => write!(f, "({x})²"),
                Fonction::Factorielle => write!(f, "{x}!"),
                Fonction::Inverse => write!(f, "1/({x})"),
                Fonction::Abs => write!(f, "|{x}|"),
                Fonction::Oppose => write!(f, "-({x})"),
                Fonction::Pourcentage => write!(f, "{x}%"),
            },
        }
    }
}

/// Lit une opérande (un jeton sans espace) depuis son texte affiché.
///
/// Ordre de reconnaissance :
/// 1. suffixes `!`, `%`, `(…)²` (ils enveloppent tout ce qui précède)
/// 2. `|…|`
/// 3. préfixes `sin(`, `cos(`, … dont la parenthèse se ferme en fin de texte
/// 4. `π`, `e`
/// 5. sinon : saisie brute (éventuellement illisible → 0 à l’évaluation)
pub fn lire_operande(texte: &str) -> Result<Operande, ErreurCalcul> {
    lire_a_profondeur(texte, 0)
}

fn lire_a_profondeur(texte: &str, profondeur: usize) -> Result<Operande, ErreurCalcul> {
    if profondeur > PROFONDEUR_MAX {
        return Err(ErreurCalcul::ProfondeurExcessive(PROFONDEUR_MAX));
    }

    if let Some((fonction, interieur)) = reconnaitre_notation(texte) {
        let x = lire_a_profondeur(interieur, profondeur + 1)?;
        return Ok(x.envelopper(fonction));
    }

    Ok(match texte {
        "π" => Operande::Constante(Constante::Pi),
        "e" => Operande::Constante(Constante::E),
        _ => Operande::saisie(texte),
    })
}

/// Reconnaît la notation la plus externe d’un texte et renvoie son intérieur.
fn reconnaitre_notation(texte: &str) -> Option<(Fonction, &str)> {
    // (1) suffixes
    if let Some(x) = texte.strip_suffix('!').filter(|x| !x.is_empty()) {
        return Some((Fonction::Factorielle, x));
    }
    if let Some(x) = texte.strip_suffix('%').filter(|x| !x.is_empty()) {
        return Some((Fonction::Pourcentage, x));
    }
    if let Some(x) = texte
        .strip_suffix('²')
        .and_then(|x| x.strip_prefix('('))
        .and_then(|x| x.strip_suffix(')'))
        .filter(|x| parentheses_equilibrees(x))
    {
        return Some((Fonction::Carre, x));
    }

    // (2) valeur absolue
    if let Some(x) = texte
        .strip_prefix('|')
        .and_then(|x| x.strip_suffix('|'))
        .filter(|x| !x.is_empty())
    {
        return Some((Fonction::Abs, x));
    }

    // (3) préfixes
    PREFIXES.iter().find_map(|(prefixe, fonction)| {
        texte
            .strip_prefix(*prefixe)
            .and_then(|x| x.strip_suffix(')'))
            .filter(|x| parentheses_equilibrees(x))
            .map(|x| (*fonction, x))
    })
}

/// Vrai si chaque ')' ferme un '(' ouvert plus tôt et si tout est refermé.
/// Garantit que la parenthèse finale ferme bien celle du préfixe :
/// "sin(1)+cos(2)" n’est pas une notation sin.
fn parentheses_equilibrees(texte: &str) -> bool {
    let mut niveau: usize = 0;
    for c in texte.chars() {
        match c {
            '(' => niveau += 1,
            ')' => {
                if niveau == 0 {
                    return false;
                }
                niveau -= 1;
            }
            _ => {}
        }
    }
    niveau == 0
}
