// src/noyau/format.rs
//
// Affichage du résultat final.
//
// - NaN / ±inf            => 0
// - -0                    => 0
// - entier court (<= 10 caractères) => tel quel ("120", "-123456789")
// - sinon : arrondi à 10 décimales, PUIS re-rendu depuis le nombre arrondi
//   (plus de zéros de queue ni de point final : 0.1 + 0.2 => "0.3")
// - |x| >= 1e21 ou |x| < 1e-6 : notation exponentielle, signe d’exposant
//   explicite comme Number#toString ("1e+21", "1.5e-7")

/// Nombre max de caractères d’un entier affiché sans arrondi.
const LONGUEUR_ENTIER_MAX: usize = 10;

/// Décimales conservées à l’arrondi.
const DECIMALES: usize = 10;

/// À partir de cette magnitude, rendu exponentiel.
const SEUIL_EXPONENTIEL: f64 = 1e21;

/// Sous cette magnitude (non nulle), rendu exponentiel aussi.
const SEUIL_EXPONENTIEL_BAS: f64 = 1e-6;

pub fn format_resultat(x: f64) -> String {
    let x = normaliser(x);

    if x.fract() == 0.0 {
        let s = rendu_nombre(x);
        if s.chars().count() <= LONGUEUR_ENTIER_MAX {
            return s;
        }
    }

    let arrondi: f64 = format!("{:.*}", DECIMALES, x).parse().unwrap_or(0.0);
    rendu_nombre(normaliser(arrondi))
}

/// Ramène les valeurs non affichables à 0 (et -0 à 0).
fn normaliser(x: f64) -> f64 {
    if !x.is_finite() || x == 0.0 {
        0.0
    } else {
        x
    }
}

fn rendu_nombre(x: f64) -> String {
    let a = x.abs();
    if a == 0.0 || (SEUIL_EXPONENTIEL_BAS..SEUIL_EXPONENTIEL).contains(&a) {
        return format!("{x}");
    }

    // "{:e}" donne "1e21" : on ajoute le "+" des exposants positifs
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantisse, exposant)) if !exposant.starts_with('-') => {
            format!("{mantisse}e+{exposant}")
        }
        _ => s,
    }
}
