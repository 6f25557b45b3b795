// src/app.rs
//
// Calculatrice scientifique : module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier global : pas de champ texte, chaque touche devient une Commande

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::{Commande, Operateur};

/// Texte tapé (Event::Text) -> commande.
/// "c"/"C" efface, "=" calcule ; "," vaut "." (claviers FR).
pub fn commande_clavier(texte: &str) -> Option<Commande> {
    let mut it = texte.chars();
    let c = it.next()?;
    if it.next().is_some() {
        return None;
    }

    match c {
        '0'..='9' => Some(Commande::Chiffre(c)),
        '.' | ',' => Some(Commande::Virgule),
        '=' => Some(Commande::Calculer),
        'c' | 'C' => Some(Commande::Effacer),
        _ => Operateur::depuis_symbole(c).map(Commande::Operateur),
    }
}

/// Touches nommées (sans texte) -> commande.
pub fn commande_touche(touche: egui::Key) -> Option<Commande> {
    match touche {
        egui::Key::Enter => Some(Commande::Calculer),
        egui::Key::Escape => Some(Commande::Effacer),
        egui::Key::Backspace => Some(Commande::EffacerDernier),
        _ => None,
    }
}

impl AppCalc {
    /// Événements clavier de la frame, dans l’ordre de frappe.
    fn gerer_clavier(&mut self, ctx: &egui::Context) {
        let commandes: Vec<Commande> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => commande_clavier(t),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => commande_touche(*key),
                    _ => None,
                })
                .collect()
        });

        for cmd in commandes {
            self.executer(cmd);
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.gerer_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
