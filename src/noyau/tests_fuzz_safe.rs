//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la machine à états sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - séquences de touches bornées (donc imbrication < garde-fou)
//! - budget temps global
//! - invariants clés :
//!   * l’affichage n’est jamais vide
//!   * le texte de l’expression se relit en la MÊME structure
//!   * "=" donne le même affichage que eval_expression(texte)

use std::time::{Duration, Instant};

use super::eval::eval_expression;
use super::expr::{Constante, Fonction};
use super::jetons::{tokenize, Expression, Operateur};
use super::saisie::{Calculatrice, Commande, Notifications, Scientifique};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Hôte de test ------------------------ */

#[derive(Default)]
struct Ecran {
    affichage: String,
    historique: String,
}

impl Notifications for Ecran {
    fn affichage_change(&mut self, texte: &str) {
        self.affichage = texte.to_string();
    }
    fn historique_change(&mut self, texte: &str) {
        self.historique = texte.to_string();
    }
    fn historique_efface(&mut self) {
        self.historique.clear();
    }
}

/* ------------------------ Génération de touches (bornée) ------------------------ */

const FONCTIONS: [Scientifique; 15] = [
    Scientifique::Fonction(Fonction::Sin),
    Scientifique::Fonction(Fonction::Cos),
    Scientifique::Fonction(Fonction::Tan),
    Scientifique::Fonction(Fonction::Log),
    Scientifique::Fonction(Fonction::Ln),
    Scientifique::Fonction(Fonction::Racine),
    Scientifique::Fonction(Fonction::Exp),
    Scientifique::Fonction(Fonction::Carre),
    Scientifique::Fonction(Fonction::Factorielle),
    Scientifique::Fonction(Fonction::Inverse),
    Scientifique::Fonction(Fonction::Abs),
    Scientifique::Fonction(Fonction::Oppose),
    Scientifique::Fonction(Fonction::Pourcentage),
    Scientifique::Constante(Constante::Pi),
    Scientifique::Constante(Constante::E),
];

const OPERATEURS: [Operateur; 4] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
];

fn gen_commande(rng: &mut Rng) -> Commande {
    // chiffres majoritaires, effacement total rare
    match rng.pick(20) {
        0..=7 => {
            let d = char::from_digit(rng.pick(10), 10).unwrap_or('0');
            Commande::Chiffre(d)
        }
        8..=10 => Commande::Operateur(OPERATEURS[rng.pick(4) as usize]),
        11 => Commande::Virgule,
        12..=14 => Commande::Fonction(FONCTIONS[rng.pick(15) as usize]),
        15..=16 => Commande::Calculer,
        17..=18 => Commande::EffacerDernier,
        _ => Commande::Effacer,
    }
}

fn verifier_relecture(calc: &Calculatrice<Ecran>, seed: u64) {
    let texte = calc.expression();
    let relu = tokenize(&texte)
        .unwrap_or_else(|e| panic!("seed={seed} relecture de {texte:?} impossible: {e}"));
    assert_eq!(
        relu,
        Expression::from(calc.jetons().to_vec()),
        "seed={seed} texte={texte:?}"
    );
}

/// Joue une séquence et vérifie les invariants à chaque touche.
/// Renvoie l’affichage final (pour le test de déterminisme).
fn jouer(seed: u64, longueur: usize) -> String {
    let mut rng = Rng::new(seed);
    let mut calc = Calculatrice::new(Ecran::default());

    for _ in 0..longueur {
        let cmd = gen_commande(&mut rng);

        if cmd == Commande::Calculer && !calc.expression().is_empty() {
            let attendu = eval_expression(&calc.expression());
            let obtenu = calc.calculer().expect("expression non vide");
            assert_eq!(obtenu, attendu, "seed={seed}");
            assert!(calc.doit_effacer(), "seed={seed}");
        } else {
            calc.executer(cmd);
        }

        assert!(
            !calc.notifications().affichage.is_empty(),
            "seed={seed} affichage vide après {cmd:?}"
        );
        if cmd == Commande::Effacer {
            assert_eq!(calc.notifications().affichage, "0");
            assert!(calc.notifications().historique.is_empty());
        }
        verifier_relecture(&calc, seed);
    }

    calc.notifications().affichage.clone()
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_sequences_de_touches() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for seed in 0..300u64 {
        jouer(seed, 40);
        budget(t0, max);
    }
}

#[test]
fn fuzz_determinisme() {
    for seed in [1u64, 7, 42, 1234, 99_999] {
        assert_eq!(jouer(seed, 60), jouer(seed, 60), "seed={seed}");
    }
}

#[test]
fn fuzz_textes_arbitraires_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // morceaux valides ET invalides, collés au hasard
    let morceaux = [
        "1", "0", "9", ".", " + ", " - ", " * ", " / ", "+", "-", "(", ")", "sin(", "√(", "|",
        "!", "%", "²", "π", "e", " ", "1/(", "-(", "abc", "inf",
    ];

    let mut rng = Rng::new(0xC0FFEE);
    for _ in 0..2000 {
        let n = 1 + rng.pick(12) as usize;
        let mut s = String::new();
        for _ in 0..n {
            s.push_str(morceaux[rng.pick(morceaux.len() as u32) as usize]);
        }

        let e = eval_expression(&s);
        assert!(!e.affichage.is_empty(), "s={s:?}");
        if !e.erreur {
            // un résultat affiché est toujours relisible comme nombre fini
            let v: f64 = e
                .affichage
                .parse()
                .unwrap_or_else(|_| panic!("s={s:?} affichage={:?}", e.affichage));
            assert!(v.is_finite(), "s={s:?}");
        }
        budget(t0, max);
    }
}
