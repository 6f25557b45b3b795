//! Erreurs du noyau.
//!
//! Taxonomie courte : tout ce qui est "récupérable" (nombre illisible, jeton
//! mal placé, division par zéro, résultat non fini) vaut 0 et n’arrive jamais
//! ici. Reste l’imbrication excessive, affichée "Error" par l’hôte, et les
//! noms de touches inconnus côté hôte.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Notations imbriquées au-delà du garde-fou (anti débordement de pile).
    #[error("imbrication trop profonde (max {0} niveaux)")]
    ProfondeurExcessive(usize),

    /// Nom de fonction scientifique inconnu (commande hôte).
    #[error("fonction inconnue : {0:?}")]
    FonctionInconnue(String),
}
