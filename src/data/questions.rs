use indexmap::IndexMap;

/// Multiple-choice question presented during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Stable identifier (`q1`, `q2`, ...).
    pub id: String,
    /// Prompt displayed to the player.
    pub prompt: String,
    /// Ordered answer options.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_index: usize,
}

impl Question {
    /// Text of the correct option.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Immutable, ordered set of questions loaded in full at startup.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: IndexMap<String, Question>,
}

impl QuestionBank {
    /// Build a bank from an ordered list, keyed by question id.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions
                .into_iter()
                .map(|question| (question.id.clone(), question))
                .collect(),
        }
    }

    /// The built-in well-being questionnaire.
    pub fn well_being() -> Self {
        Self::new(
            WELL_BEING_QUESTIONS
                .iter()
                .map(|(id, prompt, options, correct_index)| Question {
                    id: (*id).to_string(),
                    prompt: (*prompt).to_string(),
                    options: options.iter().map(|option| option.to_string()).collect(),
                    correct_index: *correct_index,
                })
                .collect(),
        )
    }

    /// Number of questions in a run.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank holds no question at all.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at the given position in the run.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get_index(index).map(|(_, question)| question)
    }

    /// Question looked up by identifier.
    pub fn by_id(&self, id: &str) -> Option<&Question> {
        self.questions.get(id)
    }
}

type RawQuestion = (&'static str, &'static str, [&'static str; 4], usize);

const WELL_BEING_QUESTIONS: [RawQuestion; 5] = [
    (
        "q1",
        "Quelle est la meilleure façon de faire une pause mentale au travail ?",
        [
            "Consulter les réseaux sociaux",
            "Marcher quelques minutes à l'extérieur",
            "Continuer à travailler sur un autre projet",
            "Regarder ses emails",
        ],
        1,
    ),
    (
        "q2",
        "À quelle fréquence devriez-vous vous éloigner de votre écran ?",
        [
            "Toutes les 20-30 minutes",
            "Une fois par jour",
            "Uniquement pendant le déjeuner",
            "Jamais, cela ralentit la productivité",
        ],
        0,
    ),
    (
        "q3",
        "Quel signe indique que vous devez mieux définir vos limites ?",
        [
            "Vous vous sentez énergisé après le travail",
            "Vous vérifiez vos emails le soir et le week-end",
            "Vous prenez toutes vos pauses",
            "Vous refusez les réunions non essentielles",
        ],
        1,
    ),
    (
        "q4",
        "Quelle pratique aide à réduire le stress lié au travail ?",
        [
            "Travailler plus vite pour finir plus tôt",
            "Sauter le déjeuner pour gagner du temps",
            "Pratiquer la respiration profonde pendant 2-3 minutes",
            "Reporter ses tâches au lendemain",
        ],
        2,
    ),
    (
        "q5",
        "Quelle est la meilleure façon de terminer votre journée de travail ?",
        [
            "Fermer votre ordinateur immédiatement",
            "Planifier les priorités du lendemain et faire le point",
            "Envoyer un dernier lot d'emails",
            "Continuer à travailler jusqu'à être totalement épuisé",
        ],
        1,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_being_bank_is_ordered_and_complete() {
        let bank = QuestionBank::well_being();
        assert_eq!(bank.len(), 5);

        let ids: Vec<&str> = (0..bank.len())
            .filter_map(|index| bank.get(index))
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(ids, ["q1", "q2", "q3", "q4", "q5"]);
    }

    #[test]
    fn correct_indices_point_at_existing_options() {
        let bank = QuestionBank::well_being();
        assert!(!bank.is_empty());
        for question in (0..bank.len()).filter_map(|index| bank.get(index)) {
            assert!(question.correct_index < question.options.len());
        }
    }

    #[test]
    fn lookup_by_id_and_index_agree() {
        let bank = QuestionBank::well_being();
        assert_eq!(bank.get(3), bank.by_id("q4"));
        assert_eq!(
            bank.by_id("q2").unwrap().correct_option(),
            "Toutes les 20-30 minutes"
        );
        assert!(bank.get(5).is_none());
    }
}
