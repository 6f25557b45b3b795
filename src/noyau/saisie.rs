//! Saisie : machine à états de la calculatrice (sans vue).
//!
//! Rôle : construire l’expression touche par touche, puis la faire évaluer.
//! L’hôte (vue egui, tests, …) est prévenu par `Notifications` :
//! - affichage_change : nouveau texte principal
//! - historique_change / historique_efface : ligne "travail montré"
//!
//! Contrats :
//! - Aucune opération ne panique ; l’évaluation finit TOUJOURS sur un texte
//!   affichable (résultat ou "Error").
//! - `doit_effacer` : vrai juste après un calcul, le prochain chiffre
//!   démarre une nouvelle expression.

use std::str::FromStr;

use super::erreur::ErreurCalcul;
use super::eval::{evaluer_pour_affichage, Evaluation};
use super::expr::{Constante, Fonction, Operande};
use super::jetons::{Expression, Jeton, Operateur};

/// Rappels vers l’hôte.
pub trait Notifications {
    fn affichage_change(&mut self, texte: &str);
    fn historique_change(&mut self, texte: &str);
    fn historique_efface(&mut self);
}

/// Hôte muet (évaluations sans écran).
impl Notifications for () {
    fn affichage_change(&mut self, _texte: &str) {}
    fn historique_change(&mut self, _texte: &str) {}
    fn historique_efface(&mut self) {}
}

/// Touche "fonction" : notation autour d’une valeur, ou constante.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scientifique {
    Fonction(Fonction),
    Constante(Constante),
}

impl FromStr for Scientifique {
    type Err = ErreurCalcul;

    /// Noms de touches côté hôte.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Scientifique::{Constante as C, Fonction as F};

        Ok(match s {
            "sin" => F(Fonction::Sin),
            "cos" => F(Fonction::Cos),
            "tan" => F(Fonction::Tan),
            "log" => F(Fonction::Log),
            "ln" => F(Fonction::Ln),
            "sqrt" => F(Fonction::Racine),
            "pow" => F(Fonction::Carre),
            "factorial" => F(Fonction::Factorielle),
            "percent" => F(Fonction::Pourcentage),
            "inverse" => F(Fonction::Inverse),
            "abs" => F(Fonction::Abs),
            "negate" => F(Fonction::Oppose),
            "exp" => F(Fonction::Exp),
            "pi" => C(Constante::Pi),
            "e" => C(Constante::E),
            _ => return Err(ErreurCalcul::FonctionInconnue(s.to_string())),
        })
    }
}

/// Commandes entrantes (boutons / clavier), une par opération.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Chiffre(char),
    Operateur(Operateur),
    Virgule,
    Fonction(Scientifique),
    Calculer,
    Effacer,
    EffacerDernier,
}

/// Valeur initiale / après effacement de `dernier_resultat`.
const RESULTAT_INITIAL: &str = "0";

#[derive(Clone, Debug)]
pub struct Calculatrice<N: Notifications> {
    expression: Expression,
    dernier_resultat: String,
    doit_effacer: bool,
    notifications: N,
}

impl<N: Notifications> Calculatrice<N> {
    /// Nouvelle calculatrice ; l’hôte reçoit tout de suite l’affichage "0".
    pub fn new(mut notifications: N) -> Self {
        notifications.affichage_change(RESULTAT_INITIAL);
        Self {
            expression: Expression::default(),
            dernier_resultat: RESULTAT_INITIAL.to_string(),
            doit_effacer: false,
            notifications,
        }
    }

    /* ------------------------ Lecture de l’état ------------------------ */

    /// Texte de l’expression en cours (currentExpression).
    pub fn expression(&self) -> String {
        self.expression.to_string()
    }

    pub fn jetons(&self) -> &[Jeton] {
        self.expression.jetons()
    }

    pub fn dernier_resultat(&self) -> &str {
        &self.dernier_resultat
    }

    pub fn doit_effacer(&self) -> bool {
        self.doit_effacer
    }

    pub fn notifications(&self) -> &N {
        &self.notifications
    }

    /* ------------------------ Commandes ------------------------ */

    /// Point d’entrée unique de l’hôte.
    pub fn executer(&mut self, commande: Commande) {
        tracing::debug!(?commande, "commande");
        match commande {
            Commande::Chiffre(c) => {
                self.saisir_chiffre(c);
            }
            Commande::Operateur(op) => {
                self.saisir_operateur(op);
            }
            Commande::Virgule => {
                self.saisir_virgule();
            }
            Commande::Fonction(s) => {
                self.appliquer_fonction(s);
            }
            Commande::Calculer => {
                self.calculer();
            }
            Commande::Effacer => self.effacer(),
            Commande::EffacerDernier => {
                self.effacer_dernier();
            }
        }
    }

    /// Chiffre '0'..='9'. Une expression réduite à "0" est remplacée ;
    /// ailleurs le chiffre s’ajoute ("3 + 0" puis 5 => "3 + 05").
    pub fn saisir_chiffre(&mut self, c: char) -> String {
        if !c.is_ascii_digit() {
            tracing::warn!("saisir_chiffre: {c:?} n’est pas un chiffre, ignoré");
            return self.expression();
        }

        self.sortir_du_mode_resultat();

        if self.expression_est_zero() {
            self.expression.reinitialiser(Operande::saisie(c));
            self.notifier_affichage();
            return self.expression();
        }

        match self.expression.derniere_operande_mut() {
            Some(Operande::Saisie(t)) => t.push(c),
            Some(_) => self.multiplication_implicite(Operande::saisie(c)),
            None => self.expression.pousser_operande(Operande::saisie(c)),
        }

        self.notifier_affichage();
        self.expression()
    }

    /// Point décimal : au plus un par nombre ; "0." si rien avant.
    pub fn saisir_virgule(&mut self) -> String {
        self.sortir_du_mode_resultat();

        match self.expression.derniere_operande_mut() {
            Some(Operande::Saisie(t)) => {
                if !t.contains('.') {
                    t.push('.');
                }
            }
            Some(_) => self.multiplication_implicite(Operande::saisie("0.")),
            None => self.expression.pousser_operande(Operande::saisie("0.")),
        }

        self.notifier_affichage();
        self.expression()
    }

    /// Opérateur binaire. Après un calcul (ou sur une expression vide), on
    /// repart du dernier résultat ; un opérateur final est remplacé.
    pub fn saisir_operateur(&mut self, op: Operateur) -> String {
        if self.doit_effacer || self.expression.est_vide() {
            self.doit_effacer = false;
            self.expression
                .reinitialiser(Operande::saisie(self.dernier_resultat.clone()));
        }

        self.expression.pousser_operateur(op);

        let texte = self.expression();
        self.notifications.affichage_change(&texte);
        self.notifications.historique_change(&texte);
        texte
    }

    /// Touche fonction : enveloppe la valeur courante dans sa notation.
    ///
    /// Valeur courante = dernier résultat (après un calcul, ou si rien n’est
    /// saisi après le dernier opérateur), sinon l’opérande finale elle-même
    /// (les notations s’emboîtent : sin puis √ => √(sin(30))).
    pub fn appliquer_fonction(&mut self, s: Scientifique) -> String {
        let repart = self.doit_effacer || self.expression.est_vide();

        let valeur = match self.expression.derniere_operande() {
            Some(op) if !repart => op.clone(),
            _ => Operande::saisie(self.dernier_resultat.clone()),
        };

        let notation = match s {
            Scientifique::Fonction(f) => vec![Jeton::Operande(valeur.envelopper(f))],
            Scientifique::Constante(c) => {
                let texte = valeur.to_string();
                if texte.is_empty() || texte == "0" {
                    vec![Jeton::Operande(Operande::Constante(c))]
                } else {
                    // 3 puis π => "3 * π"
                    vec![
                        Jeton::Operande(valeur),
                        Jeton::Operateur(Operateur::Fois),
                        Jeton::Operande(Operande::Constante(c)),
                    ]
                }
            }
        };

        if repart {
            self.expression = Expression::from(notation);
        } else {
            self.expression.remplacer_derniere_operande(notation);
        }
        self.doit_effacer = false;

        let texte = self.expression();
        self.notifications.affichage_change(&texte);
        self.notifications.historique_change(&texte);
        texte
    }

    /// DEL : retire le dernier jeton "logique".
    /// - opérateur : le jeton entier (" + " d’un coup)
    /// - nombre tapé : un caractère
    /// - constante : entière
    /// - notation : on la retire, l’argument reste (√(9) => 9)
    pub fn effacer_dernier(&mut self) -> String {
        if self.doit_effacer {
            self.effacer();
            return self.expression();
        }

        match self.expression.retirer_dernier() {
            Some(Jeton::Operande(Operande::Saisie(mut t))) => {
                t.pop();
                if !t.is_empty() && t != "-" {
                    self.expression.pousser_operande(Operande::Saisie(t));
                }
            }
            Some(Jeton::Operande(Operande::Notation(_, x))) => {
                self.expression.pousser_operande(*x);
            }
            Some(Jeton::Operande(Operande::Constante(_))) | Some(Jeton::Operateur(_)) | None => {}
        }

        self.notifier_affichage();
        self.expression()
    }

    /// C : remise à zéro totale (expression, dernier résultat, historique).
    pub fn effacer(&mut self) {
        self.expression.vider();
        self.dernier_resultat = RESULTAT_INITIAL.to_string();
        self.doit_effacer = false;
        self.notifications.affichage_change(RESULTAT_INITIAL);
        self.notifications.historique_efface();
    }

    /// "=" : évalue l’expression courante. None si elle est vide.
    ///
    /// L’expression reste en place (affichée en historique avec " =") ; la
    /// prochaine touche décide : chiffre => nouvelle expression, opérateur =>
    /// on continue depuis le résultat.
    pub fn calculer(&mut self) -> Option<Evaluation> {
        if self.expression.est_vide() {
            return None;
        }

        let texte = self.expression();
        let evaluation = evaluer_pour_affichage(self.expression.jetons());

        if evaluation.erreur {
            self.notifications.affichage_change(&evaluation.affichage);
        } else {
            self.dernier_resultat = evaluation.affichage.clone();
            self.notifications.affichage_change(&self.dernier_resultat);
            self.notifications.historique_change(&format!("{texte} ="));
        }
        self.doit_effacer = true;

        tracing::debug!(expression = %texte, resultat = %evaluation.affichage, "calcul");
        Some(evaluation)
    }

    /* ------------------------ Helpers ------------------------ */

    fn sortir_du_mode_resultat(&mut self) {
        if self.doit_effacer {
            self.expression.vider();
            self.doit_effacer = false;
        }
    }

    /// Vrai si toute l’expression est le littéral "0".
    fn expression_est_zero(&self) -> bool {
        matches!(self.expression.jetons(), [Jeton::Operande(Operande::Saisie(t))] if t == "0")
    }

    /// Chiffre tapé juste après une notation fermée ou une constante :
    /// "sin(30)" puis 2 => "sin(30) * 2".
    fn multiplication_implicite(&mut self, op: Operande) {
        self.expression.pousser_operateur(Operateur::Fois);
        self.expression.pousser_operande(op);
    }

    fn notifier_affichage(&mut self) {
        if self.expression.est_vide() {
            self.notifications.affichage_change(RESULTAT_INITIAL);
        } else {
            let texte = self.expression();
            self.notifications.affichage_change(&texte);
        }
    }
}
