//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la calculatrice du noyau et recevoir ses notifications
//! (texte principal + ligne d’historique), sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Calculatrice::executer`.
//! - L’écran ne contient que ce que le noyau lui a notifié.

use crate::config::Reglages;
use crate::noyau::{Calculatrice, Commande, Notifications};

/// Ce que la vue affiche : dernier état notifié par le noyau.
#[derive(Clone, Debug, Default)]
pub struct Ecran {
    pub affichage: String,
    pub historique: String,
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

/// Paliers (longueur max du texte, facteur) de la police de l’affichage.
const PALIERS_POLICE: [(usize, f32); 5] = [(10, 2.5), (15, 2.0), (20, 1.6), (25, 1.3), (30, 1.1)];

/// Facteur au-delà du dernier palier.
const FACTEUR_MIN: f32 = 0.9;

/// Facteur d’échelle de la police selon la longueur (en caractères).
pub fn echelle_police(longueur: usize) -> f32 {
    PALIERS_POLICE
        .iter()
        .find(|(max, _)| longueur <= *max)
        .map_or(FACTEUR_MIN, |(_, f)| *f)
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice<Ecran>,
    pub reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            calc: Calculatrice::new(Ecran::default()),
            reglages,
        }
    }

    /// Bouton ou touche clavier : une commande du noyau.
    pub fn executer(&mut self, commande: Commande) {
        self.calc.executer(commande);
    }

    pub fn affichage(&self) -> &str {
        &self.calc.notifications().affichage
    }

    pub fn historique(&self) -> &str {
        &self.calc.notifications().historique
    }

    /// Taille (px) du texte principal, réduite quand il s’allonge.
    pub fn taille_affichage(&self) -> f32 {
        self.reglages.taille_police * echelle_police(self.affichage().chars().count())
    }
}
