// src/noyau/jetons.rs
//
// Suite de jetons (opérandes / opérateurs) = l’expression en cours.
//
// Rendu texte : opérateurs entourés d’UN espace de chaque côté ("3 + 4"),
// une expression peut se terminer par un opérateur pendant la saisie ("3 + ").
// `tokenize` relit ce rendu : découpe sur les espaces, puis chaque jeton
// non-opérateur est lu par `lire_operande`.

use std::fmt;

use super::erreur::ErreurCalcul;
use super::expr::{lire_operande, Operande};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// Opération binaire, division par zéro => 0 (jamais d’erreur).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Operande(Operande),
    Operateur(Operateur),
}

/// Expression en cours de saisie (structure + rendu).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expression {
    jetons: Vec<Jeton>,
}

impl Expression {
    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }

    pub fn vider(&mut self) {
        self.jetons.clear();
    }

    /// Remplace tout le contenu par une seule opérande.
    pub fn reinitialiser(&mut self, op: Operande) {
        self.jetons.clear();
        self.jetons.push(Jeton::Operande(op));
    }

    pub fn finit_par_operateur(&self) -> bool {
        matches!(self.jetons.last(), Some(Jeton::Operateur(_)))
    }

    /// Opérande finale (None si vide ou si l’expression finit par un opérateur).
    pub fn derniere_operande(&self) -> Option<&Operande> {
        match self.jetons.last() {
            Some(Jeton::Operande(op)) => Some(op),
            _ => None,
        }
    }

    pub fn derniere_operande_mut(&mut self) -> Option<&mut Operande> {
        match self.jetons.last_mut() {
            Some(Jeton::Operande(op)) => Some(op),
            _ => None,
        }
    }

    pub fn pousser_operande(&mut self, op: Operande) {
        self.jetons.push(Jeton::Operande(op));
    }

    /// Ajoute un opérateur ; un opérateur final déjà présent est remplacé
    /// (deux opérateurs consécutifs : le dernier gagne).
    pub fn pousser_operateur(&mut self, op: Operateur) {
        if self.finit_par_operateur() {
            self.jetons.pop();
        }
        self.jetons.push(Jeton::Operateur(op));
    }

    /// Remplace l’opérande finale par `nouveaux` (ou les ajoute après un
    /// opérateur final / dans une expression vide).
    pub fn remplacer_derniere_operande(&mut self, nouveaux: Vec<Jeton>) {
        if self.derniere_operande().is_some() {
            self.jetons.pop();
        }
        self.jetons.extend(nouveaux);
    }

    pub fn retirer_dernier(&mut self) -> Option<Jeton> {
        self.jetons.pop()
    }
}

impl From<Vec<Jeton>> for Expression {
    fn from(jetons: Vec<Jeton>) -> Self {
        Self { jetons }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tokens(&self.jetons))
    }
}

/// Découpe un texte d’expression en jetons.
///
/// - séparateur : espaces (les jetons vides sont ignorés)
/// - "+", "-", "*", "/" seuls : opérateurs
/// - tout autre jeton : opérande (notations comprises)
///
/// Aucune vérification d’alternance ici : c’est la réduction (eval.rs) qui
/// décide si la suite a un sens.
pub fn tokenize(s: &str) -> Result<Expression, ErreurCalcul> {
    let mut out = Vec::new();

    for mot in s.split_whitespace() {
        let mut chars = mot.chars();
        let seul = match (chars.next(), chars.next()) {
            (Some(c), None) => Operateur::depuis_symbole(c),
            _ => None,
        };

        match seul {
            Some(op) => out.push(Jeton::Operateur(op)),
            None => out.push(Jeton::Operande(lire_operande(mot)?)),
        }
    }

    Ok(Expression::from(out))
}

/// Rendu texte d’une suite de jetons : "3 + sin(30) * ".
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = String::new();
    for t in tokens {
        match t {
            Jeton::Operande(op) => out.push_str(&op.to_string()),
            Jeton::Operateur(op) => {
                out.push(' ');
                out.push(op.symbole());
                out.push(' ');
            }
        }
    }
    out
}
