use serde::{Deserialize, Serialize};

use crate::spec::question::{QuestionSpec, SelectMode};

/// Top-level questionnaire definition: an ordered, fixed list of questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireSpec {
    pub id: String,
    pub title: String,
    pub version: String,
    pub questions: Vec<QuestionSpec>,
}

impl QuestionnaireSpec {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&QuestionSpec> {
        self.questions.get(index)
    }

    /// The built-in play questionnaire. Defined once at process start and
    /// never mutated afterwards.
    pub fn builtin() -> Self {
        QuestionnaireSpec {
            id: "lege.play".into(),
            title: "Let's Play".into(),
            version: "1.0.0".into(),
            questions: vec![
                question(
                    "age_group",
                    "What age group do you belong to?",
                    SelectMode::Single,
                    &["3-5 years", "6-8 years", "9-12 years", "13+ years"],
                ),
                question(
                    "participants",
                    "How many people will be playing together?",
                    SelectMode::Single,
                    &["1", "2", "3-5", "6-10", "10+"],
                ),
                question(
                    "duration",
                    "How much time do you have to play?",
                    SelectMode::Single,
                    &["5-10 minutes", "15-30 minutes", "30+ minutes"],
                ),
                question(
                    "location",
                    "Where will the game take place?",
                    SelectMode::Single,
                    &["Indoors", "Outdoors", "Both indoors and outdoors"],
                ),
                question(
                    "materials",
                    "What materials do you have available?",
                    SelectMode::Multiple,
                    &[
                        "Paper",
                        "Pencils",
                        "Crayons",
                        "Balls",
                        "Rope",
                        "Blankets",
                        "Water",
                        "Marbles",
                        "Hula Hoops",
                        "Papier-mâché",
                        "Marshmallows",
                        "Teddy Bears",
                        "Building Blocks",
                        "Drawing Paper",
                        "Beads",
                        "Rubber Bands",
                        "Cardboard Boxes",
                        "Chairs",
                        "Cushions",
                        "Balloons",
                        "Cloths",
                        "Boxes",
                        "Hats",
                        "Flashlights",
                        "Fabric Pieces",
                        "Legos",
                        "Towels",
                        "Scissors",
                        "Tape",
                        "String",
                        "Cardboard Balls",
                        "Plastic Bottles",
                        "Small Figures",
                        "Chalk",
                        "Spoons",
                        "Plastic Cups",
                        "Feathers",
                        "Yarn",
                        "Stones",
                        "Flowers",
                        "Leaves",
                        "Shovels",
                        "Sand",
                        "Lego Figures",
                        "Clay",
                        "Paper Bags",
                        "Shoe Boxes",
                        "Pipe Cleaners",
                        "Clips",
                        "Flag",
                    ],
                ),
                question(
                    "energy",
                    "Do you prefer calm and quiet games or more active games?",
                    SelectMode::Single,
                    &["Calm and quiet", "Active and energetic"],
                ),
            ],
        }
    }
}

fn question(id: &str, title: &str, select: SelectMode, options: &[&str]) -> QuestionSpec {
    QuestionSpec {
        id: id.into(),
        title: title.into(),
        select,
        options: options.iter().map(|option| option.to_string()).collect(),
    }
}
