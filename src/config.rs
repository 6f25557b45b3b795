// src/config.rs
//
// Réglages de l’application (fenêtre + taille de l’affichage).
//
// Fichier : <config_dir>/calculatrice-scientifique/config.toml (ou --config).
// Tout champ absent garde sa valeur par défaut ; un fichier absent ou
// invalide ne bloque jamais le démarrage (journal + défauts).
// En wasm32 : pas de système de fichiers, défauts seulement.

use serde::Deserialize;

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// Nom du dossier sous le répertoire de configuration de l’OS.
#[cfg(not(target_arch = "wasm32"))]
const DOSSIER: &str = "calculatrice-scientifique";

/// Bornes (fenêtre en px logiques, police en px).
const LARGEUR_MIN: f32 = 420.0;
const LARGEUR_MAX: f32 = 3840.0;
const HAUTEUR_MIN: f32 = 620.0;
const HAUTEUR_MAX: f32 = 2160.0;
const POLICE_MIN: f32 = 8.0;
const POLICE_MAX: f32 = 48.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Largeur initiale de la fenêtre.
    pub largeur_fenetre: f32,
    /// Hauteur initiale de la fenêtre.
    pub hauteur_fenetre: f32,
    /// Taille de base de l’affichage principal (avant mise à l’échelle).
    pub taille_police: f32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            largeur_fenetre: 520.0,
            hauteur_fenetre: 740.0,
            taille_police: 16.0,
        }
    }
}

impl Reglages {
    /// Ramène chaque valeur dans ses bornes (NaN => défaut).
    pub fn bornes(self) -> Self {
        let defaut = Self::default();
        let borner = |x: f32, min: f32, max: f32, d: f32| {
            if x.is_nan() {
                d
            } else {
                x.clamp(min, max)
            }
        };

        Self {
            largeur_fenetre: borner(
                self.largeur_fenetre,
                LARGEUR_MIN,
                LARGEUR_MAX,
                defaut.largeur_fenetre,
            ),
            hauteur_fenetre: borner(
                self.hauteur_fenetre,
                HAUTEUR_MIN,
                HAUTEUR_MAX,
                defaut.hauteur_fenetre,
            ),
            taille_police: borner(self.taille_police, POLICE_MIN, POLICE_MAX, defaut.taille_police),
        }
    }

    /// Taille minimale de fenêtre (le pavé doit rester entier).
    pub fn taille_min() -> [f32; 2] {
        [LARGEUR_MIN, HAUTEUR_MIN]
    }
}

/// Chemin par défaut : ~/.config/calculatrice-scientifique/config.toml (Linux).
#[cfg(not(target_arch = "wasm32"))]
pub fn chemin_par_defaut() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(DOSSIER).join("config.toml"))
}

/// Charge les réglages. `chemin` (souvent --config) prime sur le chemin par
/// défaut. Ne renvoie jamais d’erreur : les fautes sont journalisées.
#[cfg(not(target_arch = "wasm32"))]
pub fn charger(chemin: Option<&Path>) -> Reglages {
    let chemin = match chemin.map(Path::to_path_buf).or_else(chemin_par_defaut) {
        Some(c) => c,
        None => {
            tracing::debug!("pas de répertoire de configuration, réglages par défaut");
            return Reglages::default();
        }
    };

    if !chemin.exists() {
        tracing::debug!("réglages absents ({:?}), valeurs par défaut", chemin);
        return Reglages::default();
    }

    match std::fs::read_to_string(&chemin) {
        Ok(contenu) => match lire(&contenu) {
            Ok(r) => {
                tracing::info!("réglages chargés depuis {:?}", chemin);
                r
            }
            Err(e) => {
                tracing::warn!("réglages invalides ({:?}): {}, valeurs par défaut", chemin, e);
                Reglages::default()
            }
        },
        Err(e) => {
            tracing::warn!("lecture impossible ({:?}): {}, valeurs par défaut", chemin, e);
            Reglages::default()
        }
    }
}

/// Texte TOML -> réglages bornés.
#[cfg(not(target_arch = "wasm32"))]
pub fn lire(contenu: &str) -> Result<Reglages, toml::de::Error> {
    toml::from_str::<Reglages>(contenu).map(Reglages::bornes)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn fichier_vide_donne_les_defauts() {
        assert_eq!(lire("").unwrap(), Reglages::default());
    }

    #[test]
    fn champs_partiels() {
        let r = lire("taille_police = 20.0").unwrap();
        assert_eq!(r.taille_police, 20.0);
        assert_eq!(r.largeur_fenetre, Reglages::default().largeur_fenetre);
    }

    #[test]
    fn valeurs_bornees() {
        let r = lire(
            "largeur_fenetre = 10.0\nhauteur_fenetre = 99999.0\ntaille_police = 200.0",
        )
        .unwrap();
        assert_eq!(r.largeur_fenetre, LARGEUR_MIN);
        assert_eq!(r.hauteur_fenetre, HAUTEUR_MAX);
        assert_eq!(r.taille_police, POLICE_MAX);
    }

    #[test]
    fn nan_remplace_par_defaut() {
        let r = lire("taille_police = nan").unwrap();
        assert_eq!(r.taille_police, Reglages::default().taille_police);
    }

    #[test]
    fn toml_invalide() {
        assert!(lire("taille_police = \"grande\"").is_err());
        assert!(lire("largeur_fenetre = ").is_err());
    }

    #[test]
    fn fichier_introuvable_donne_les_defauts() {
        let r = charger(Some(Path::new("/chemin/qui/n/existe/pas/config.toml")));
        assert_eq!(r, Reglages::default());
    }
}
