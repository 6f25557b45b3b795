// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : ligne d’historique + texte principal (police selon la longueur)
// - Tactile : gros boutons, une Commande du noyau par bouton
// - Le clavier est géré dans app.rs (global, pas de champ texte à focaliser)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::expr::{Constante, Fonction};
use crate::noyau::{Commande, Operateur, Scientifique};

/// Boutons scientifiques : (libellé, touche). Libellés ASCII, lisibles
/// avec les seules polices embarquées par egui.
const BOUTONS_SCIENTIFIQUES: [(&str, Scientifique); 15] = [
    ("sin", Scientifique::Fonction(Fonction::Sin)),
    ("cos", Scientifique::Fonction(Fonction::Cos)),
    ("tan", Scientifique::Fonction(Fonction::Tan)),
    ("log", Scientifique::Fonction(Fonction::Log)),
    ("ln", Scientifique::Fonction(Fonction::Ln)),
    ("sqrt", Scientifique::Fonction(Fonction::Racine)),
    ("x^2", Scientifique::Fonction(Fonction::Carre)),
    ("x!", Scientifique::Fonction(Fonction::Factorielle)),
    ("1/x", Scientifique::Fonction(Fonction::Inverse)),
    ("|x|", Scientifique::Fonction(Fonction::Abs)),
    ("+/-", Scientifique::Fonction(Fonction::Oppose)),
    ("%", Scientifique::Fonction(Fonction::Pourcentage)),
    ("exp", Scientifique::Fonction(Fonction::Exp)),
    ("pi", Scientifique::Constante(Constante::Pi)),
    ("e", Scientifique::Constante(Constante::E)),
];

/// Colonnes de la grille scientifique.
const COLONNES_SCIENTIFIQUES: usize = 5;

const TAILLE_BOUTON: [f32; 2] = [64.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_scientifique(ui);

                ui.add_space(8.0);

                self.ui_pave_numerique(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let taille = self.taille_affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // historique : toujours une ligne, même vide
                    let historique = if self.historique().is_empty() {
                        " "
                    } else {
                        self.historique()
                    };
                    ui.label(egui::RichText::new(historique).monospace().weak());

                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.affichage())
                                .monospace()
                                .size(taille)
                                .strong(),
                        )
                        .wrap(),
                    );
                });
            });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(COLONNES_SCIENTIFIQUES)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, (libelle, touche)) in BOUTONS_SCIENTIFIQUES.iter().enumerate() {
                    self.bouton(ui, libelle, Commande::Fonction(*touche));
                    if (i + 1) % COLONNES_SCIENTIFIQUES == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton_operateur(ui, Operateur::Divise);
                self.bouton_action(ui, "DEL", "Efface le dernier élément", Commande::EffacerDernier);
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton_operateur(ui, Operateur::Fois);
                self.bouton_action(ui, "C", "Remise à zéro totale", Commande::Effacer);
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton_operateur(ui, Operateur::Moins);
                ui.label("");
                ui.end_row();

                self.bouton_chiffre(ui, '0');
                self.bouton(ui, ".", Commande::Virgule);
                self.bouton(ui, "=", Commande::Calculer);
                self.bouton_operateur(ui, Operateur::Plus);
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        self.bouton(ui, &c.to_string(), Commande::Chiffre(c));
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        self.bouton(ui, &op.symbole().to_string(), Commande::Operateur(op));
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, commande: Commande) {
        let resp = ui
            .add_sized(TAILLE_BOUTON, egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            self.executer(commande);
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, commande: Commande) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.executer(commande);
        }
    }
}
