//! Tests scientifiques (campagne) : valeurs des fonctions à travers TOUT le
//! pipeline (lecture de la notation -> évaluation -> format).
//!
//! Notes :
//! - trig en degrés ; l’affichage arrondi à 10 décimales absorbe les résidus
//!   flottants (sin(30°) = 0.49999999999999994 => "0.5", cos(90°) => "0").
//! - les domaines invalides donnent 0, jamais "Error".
//! - stress borné : sommes longues + imbrication jusqu’au garde-fou.

use std::time::{Duration, Instant};

use super::eval::{eval_expression, AFFICHAGE_ERREUR};
use super::expr::PROFONDEUR_MAX;

fn eval_ok(expr: &str) -> String {
    let e = eval_expression(expr);
    assert!(!e.erreur, "expr={expr:?} en erreur");
    e.affichage
}

fn assert_affiche(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Trigonométrie (degrés) ------------------------ */

#[test]
fn sci_trig_angles_remarquables() {
    assert_affiche("sin(30)", "0.5");
    assert_affiche("sin(90)", "1");
    assert_affiche("cos(60)", "0.5");
    assert_affiche("cos(90)", "0");
    assert_affiche("cos(180)", "-1");
    assert_affiche("tan(45)", "1");
    assert_affiche("sin(-30)", "-0.5");
}

#[test]
fn sci_trig_imbriquee() {
    // sin(cos(0)) = sin(1°)
    assert_affiche("sin(cos(0))", "0.0174524064");
    assert_affiche("cos(sin(0))", "1");
}

/* ------------------------ Logarithmes, racine, exp ------------------------ */

#[test]
fn sci_logarithmes() {
    assert_affiche("log(1000)", "3");
    assert_affiche("log(1)", "0");
    assert_affiche("ln(e)", "1");
    assert_affiche("ln(1)", "0");
    // hors domaine : 0
    assert_affiche("log(0)", "0");
    assert_affiche("ln(-5)", "0");
}

#[test]
fn sci_racine_et_exp() {
    assert_affiche("√(9)", "3");
    assert_affiche("√(2)", "1.4142135624");
    assert_affiche("√(-4)", "0");
    assert_affiche("√(√(16))", "2");
    assert_affiche("exp(0)", "1");
    assert_affiche("exp(1)", "2.7182818285");
}

/* ------------------------ Carré, factorielle ------------------------ */

#[test]
fn sci_carre() {
    assert_affiche("(5)²", "25");
    assert_affiche("(-3)²", "9");
    assert_affiche("((2)²)²", "16");
}

#[test]
fn sci_factorielle() {
    assert_affiche("0!", "1");
    assert_affiche("5!", "120");
    assert_affiche("5.9!", "120");
    assert_affiche("20!", "2432902008176640000");
    // argument négatif : hors domaine
    assert_affiche("-(5)!", "0");
    // au-delà de 170! : non fini => 0
    assert_affiche("200!", "0");
}

/* ------------------------ Inverse, abs, opposé, pourcentage ------------------------ */

#[test]
fn sci_unaires() {
    assert_affiche("1/(4)", "0.25");
    assert_affiche("1/(0)", "0");
    assert_affiche("|-7|", "7");
    assert_affiche("-(5)", "-5");
    assert_affiche("-(-(5))", "5");
    assert_affiche("50%", "0.5");
    assert_affiche("5!%", "1.2");
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn sci_constantes() {
    assert_affiche("π", "3.1415926536");
    assert_affiche("e", "2.7182818285");
    assert_affiche("2 * π", "6.2831853072");
    assert_affiche("cos(π)", "0.9984971499");
}

/* ------------------------ Combinaisons (toujours sans priorité) ------------------------ */

#[test]
fn sci_combinaisons_sequentielles() {
    assert_affiche("3 + sin(30) * 2", "7");
    assert_affiche("200 * 10%", "20");
    assert_affiche("√(9) + (2)² / 7", "1");
    assert_affiche("1/(8) * 5! - |-15|", "0");
}

/* ------------------------ Résultats en notation exponentielle ------------------------ */

#[test]
fn sci_exposants_relus() {
    assert_affiche("1 / 10000000", "1e-7");
    assert_affiche("1e-7 * 10", "0.000001");
    assert_affiche("1e+21 + 1e+21", "2e+21");
    assert_affiche("(100000000000)²", "1e+22");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = String::new();
    for k in 0..2000 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("0.5");
        budget(t0, max);
    }

    assert_affiche(&expr, "1000");
    budget(t0, max);
}

#[test]
fn sci_stress_imbrication_au_garde_fou() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = "-16".to_string();
    for _ in 0..PROFONDEUR_MAX {
        expr = format!("|{expr}|");
        budget(t0, max);
    }
    // PROFONDEUR_MAX niveaux : accepté
    assert_affiche(&expr, "16");

    // un de plus : refusé proprement
    let trop = format!("√({expr})");
    let e = eval_expression(&trop);
    assert!(e.erreur);
    assert_eq!(e.affichage, AFFICHAGE_ERREUR);
}

#[test]
fn sci_stress_factorielle_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // la borne haute du domaine ne doit pas lancer un produit géant
    assert_affiche("1000000!", "0");
    assert_affiche("170! / 170!", "1");
    budget(t0, max);
}
