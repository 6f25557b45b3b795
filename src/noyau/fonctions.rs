// src/noyau/fonctions.rs
//
// Fonctions scientifiques (valeurs numériques).
//
// Règles (repli silencieux, jamais d’erreur) :
// - sin/cos/tan : argument en DEGRÉS
// - log, ln     : 0 si x <= 0
// - √           : 0 si x < 0
// - 1/(x)       : 0 si x == 0
// - x!          : factorielle de floor(x), domaine 0..=1 000 000, sinon 0
//
// Les valeurs non finies (exp(1000), 171!, …) sont laissées telles quelles :
// c’est le post-traitement (format.rs) qui les ramène à 0.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::expr::{Constante, Fonction};

/// Borne haute du domaine accepté par x!.
pub const FACTORIELLE_MAX: u64 = 1_000_000;

/// Dernier n tel que n! tienne dans un f64 (171! = inf).
pub const FACTORIELLE_FINIE_MAX: u64 = 170;

/// Applique une fonction à une valeur déjà évaluée.
pub fn appliquer(f: Fonction, x: f64) -> f64 {
    match f {
        Fonction::Sin => x.to_radians().sin(),
        Fonction::Cos => x.to_radians().cos(),
        Fonction::Tan => x.to_radians().tan(),
        Fonction::Log => {
            if x > 0.0 {
                x.log10()
            } else {
                0.0
            }
        }
        Fonction::Ln => {
            if x > 0.0 {
                x.ln()
            } else {
                0.0
            }
        }
        Fonction::Racine => {
            if x >= 0.0 {
                x.sqrt()
            } else {
                0.0
            }
        }
        Fonction::Exp => x.exp(),
        Fonction::Carre => x.powi(2),
        Fonction::Factorielle => factorielle(x),
        Fonction::Inverse => {
            if x != 0.0 {
                1.0 / x
            } else {
                0.0
            }
        }
        Fonction::Abs => x.abs(),
        Fonction::Oppose => -x,
        Fonction::Pourcentage => x / 100.0,
    }
}

pub fn valeur_constante(c: Constante) -> f64 {
    match c {
        Constante::Pi => std::f64::consts::PI,
        Constante::E => std::f64::consts::E,
    }
}

/// n! pour n = floor(x).
///
/// - hors domaine (négatif, NaN, > FACTORIELLE_MAX) : 0
/// - au-delà de 170 : +inf sans calcul (le produit déborderait de toute façon)
/// - sinon : produit exact en BigUint, puis UN seul arrondi vers f64
pub fn factorielle(x: f64) -> f64 {
    let n = x.floor();
    if !(0.0..=FACTORIELLE_MAX as f64).contains(&n) {
        return 0.0;
    }

    let n = n as u64;
    if n > FACTORIELLE_FINIE_MAX {
        return f64::INFINITY;
    }

    (2..=n)
        .fold(BigUint::one(), |acc, k| acc * k)
        .to_f64()
        .unwrap_or(f64::INFINITY)
}
