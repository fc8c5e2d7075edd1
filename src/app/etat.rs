//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, résultat, erreur,
//! historique, démarche) et offrir des opérations simples (C/AC/DEL,
//! historique borné) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing; on ne fait que porter la
//!   démarche produite par le noyau).
//! - Actions déterministes, sans effet de bord caché.
//! - L'historique est borné (anti-croissance infinie) et non persisté.
//!
//! La normalisation des symboles d'affichage (× ÷ − √) vers le jeu
//! canonique ASCII vit ici : c'est une responsabilité de la couche UI,
//! pas du noyau.

use crate::noyau::Demarche;

/// Nombre maximal d'entrées d'historique conservées.
const HISTORIQUE_MAX: usize = 21;

/// Normalise une expression "affichage" vers le jeu canonique du noyau :
/// `×` -> `*`, `÷` -> `/`, `−` -> `-`, `√(` -> `sqrt(`.
pub fn canonicaliser(affichage: &str) -> String {
    affichage
        .replace('×', "*")
        .replace('÷', "/")
        .replace('−', "-")
        .replace('√', "sqrt")
}

#[derive(Clone, Debug)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur (symboles d'affichage) ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // résultat (ou aperçu) formaté
    pub erreur: String,   // message d'erreur (si parsing/éval échoue)

    // --- démarche (panneau d'explication) ---
    pub demarche: Demarche,

    // --- historique (borné, plus récent en tête, non persisté) ---
    pub historique: Vec<EntreeHistorique>,

    // --- UX ---
    // Après un "=", la prochaine saisie remplace l'entrée au lieu de
    // s'y concaténer.
    pub remplacer_entree: bool,
    // Permet à vue.rs de redonner le focus à l'entrée après un clic.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: "0".to_string(),
            erreur: String::new(),
            demarche: Demarche::default(),
            historique: Vec::new(),
            remplacer_entree: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultat + erreur + démarche).
    /// L'historique est conservé (bouton dédié pour le vider).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.resultat = "0".to_string();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.remplacer_entree = false;
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher au résultat).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.remplacer_entree = false;
        self.focus_entree = true;
    }

    /// Saisie d'un fragment ("7", "sin(", "×", ...).
    pub fn inserer(&mut self, fragment: &str) {
        if self.remplacer_entree {
            self.entree.clear();
            self.remplacer_entree = false;
        }
        self.entree.push_str(fragment);
        self.focus_entree = true;
    }

    /// DEL "intelligent" : retire d'un coup les motifs connus
    /// ("sin(", "sqrt(", "π", ...), sinon un caractère.
    pub fn backspace_entree(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        for motif in [
            "sin(", "cos(", "tan(", "log(", "ln(", "sqrt(", "√(", "pi",
        ] {
            if self.entree.ends_with(motif) {
                for _ in 0..motif.chars().count() {
                    self.entree.pop();
                }
                self.focus_entree = true;
                return;
            }
        }

        self.entree.pop();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier affichage) pour ne pas "effacer
    ///   l'écran" sur une faute.
    /// - On coupe la démarche (non fiable si l'évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat validé ("=") + démarche,
    /// et l'archiver dans l'historique.
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.remplacer_entree = true;
        self.focus_entree = true;

        self.ajouter_historique();
    }

    /// Utilitaire : aperçu en cours de saisie (pas d'archivage,
    /// pas de remplacement).
    pub fn set_apercu(&mut self, resultat: impl Into<String>) {
        self.erreur.clear();
        self.resultat = resultat.into();
    }

    fn ajouter_historique(&mut self) {
        self.historique.insert(
            0,
            EntreeHistorique {
                expression: self.entree.clone(),
                resultat: self.resultat.clone(),
            },
        );
        self.historique.truncate(HISTORIQUE_MAX);
    }

    pub fn vider_historique(&mut self) {
        self.historique.clear();
        self.focus_entree = true;
    }
}
