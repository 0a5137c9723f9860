//! Parser tests over the verified sample documents
//!
//! Every test loads its source through `Samples` and checks the result with `assert_topic`.

use bqc_parser::bqc::answers::{check_blank, validation_status, ValidationStatus};
use bqc_parser::bqc::error::ParseError;
use bqc_parser::bqc::repair::RepairOptions;
use bqc_parser::bqc::testing::assert_topic;
use bqc_parser::bqc::testing::samples::Samples;

#[test]
fn test_cell_biology_structure() {
    let topic = Samples::cell_biology().parse();

    assert_topic(&topic)
        .slug("cell-biology")
        .title("Cell Biology")
        .description("Organelles, membranes and cell division")
        .totals(3, 6, 7)
        .section(0, |section| {
            section
                .id("organelles")
                .title("Organelles")
                .question_count(3)
                .question(0, |question| {
                    question
                        .id("q1")
                        .number(1)
                        .content_count(3)
                        .text(0, "The ")
                        .blank(1, &["mitochondria", "mitochondrion"], "...")
                        .text(2, " is the powerhouse of the cell.");
                })
                .question(1, |question| {
                    question
                        .text(0, "Plant cells capture light in the ")
                        .blank(1, &["chloroplast"], "organelle")
                        .text(2, ".");
                })
                .question(2, |question| {
                    question
                        .blank_count(2)
                        .blank(1, &["ribosomes", "ribosome"], "tiny structures")
                        .item(3, |item| {
                            item.id("q3-blank-1")
                                .answers(&["endoplasmic reticulum", "ER"])
                                .placeholder("...");
                        });
                });
        })
        .section(1, |section| {
            section
                .id("section-2")
                .title("Membranes")
                .question_count(2)
                .question(0, |question| {
                    question
                        .id("q4")
                        .content_count(5)
                        .text(2, ".\n   The membrane is ")
                        .blank(3, &["selectively permeable", "semi-permeable"], "two words")
                        .display_text(
                            "Water crosses the membrane by ___.\n   The membrane is ___.",
                        );
                })
                .question(1, |question| {
                    question.id("q5").blank_count(0).content_count(1);
                });
        })
        .section(2, |section| {
            section
                .id("section-3")
                .title("Cell Division")
                .question(0, |question| {
                    question.number(6).item(1, |item| {
                        item.id("q6-blank-0").answers(&["anaphase"]);
                    });
                });
        });
}

#[test]
fn test_cell_biology_metadata() {
    let doc = Samples::cell_biology().parse_document();

    assert_eq!(doc.metadata.author.as_deref(), Some("Ms. Rivera"));
    assert_eq!(doc.metadata.version.as_deref(), Some("1.0"));
    assert_eq!(doc.metadata.extra.get("grade").map(String::as_str), Some("9"));
}

#[test]
fn test_no_sections_gets_implicit_section() {
    let topic = Samples::no_sections().parse();

    assert_topic(&topic)
        .section_count(1)
        .totals(1, 3, 2)
        .section(0, |section| {
            section
                .id("section-1")
                .title("Questions")
                .question_count(3)
                .question(2, |question| {
                    question
                        .id("q3")
                        .content_count(1)
                        .text(0, "What does ATP stand for?");
                });
        });
}

#[test]
fn test_explicit_ids() {
    let topic = Samples::explicit_ids().parse();

    assert_topic(&topic)
        .section(0, |section| {
            section
                .id("mendel")
                .title("Mendel")
                .question(0, |question| {
                    question
                        .id("mendel-peas")
                        .number(1)
                        .display_text("Mendel studied ___.")
                        .item(1, |item| {
                            item.id("mendel-peas-blank-0")
                                .answers(&["pea plants", "peas"])
                                .placeholder("organism");
                        });
                })
                .question(1, |question| {
                    question.id("q2").item(1, |item| {
                        item.id("q2-blank-0");
                    });
                });
        })
        .section(1, |section| {
            section
                .id("modern")
                .title("Modern Genetics")
                .question(0, |question| {
                    question
                        .id("genotype")
                        .number(10)
                        .display_text("The ___ is the genetic makeup.");
                });
        });
}

#[test]
fn test_stray_content_is_ignored() {
    let topic = Samples::stray_content().parse();

    assert_topic(&topic)
        .totals(3, 3, 3)
        .section(0, |section| {
            section
                .id("section-1")
                .title("Food Webs")
                .question_count(2)
                .question(0, |question| {
                    question.id("q3").number(3);
                })
                .question(1, |question| {
                    question.id("q1").number(1);
                });
        })
        .section(1, |section| {
            section.title("Empty Section").question_count(0);
        })
        .section(2, |section| {
            section
                .id("section-3")
                .question(0, |question| {
                    question.blank(1, &["decomposers", "saprotrophs"], "...");
                });
        });
}

#[test]
fn test_invalid_blank_fails() {
    assert_eq!(
        Samples::invalid_blank().parse_err(),
        ParseError::InvalidBlank {
            question_id: "q2".to_string(),
            token: "{ | }".to_string(),
        }
    );
}

#[test]
fn test_missing_description_fails() {
    assert_eq!(
        Samples::missing_description().parse_err(),
        ParseError::MissingMetadata {
            keys: vec!["description".to_string()],
        }
    );
}

#[test]
fn test_generated_raw_needs_repair() {
    let err = Samples::generated_raw().parse_err();
    assert!(matches!(err, ParseError::MissingMetadata { ref keys } if keys.len() == 3));

    let topic = Samples::generated_raw()
        .loader()
        .repaired("upload.pdf", &RepairOptions::default())
        .parse()
        .unwrap();

    assert_topic(&topic)
        .slug("photosynthesis")
        .title("Photosynthesis")
        .description("Educational quiz generated from PDF content")
        .totals(2, 3, 3)
        .section(1, |section| {
            section.title("Calvin Cycle").question(0, |question| {
                question.blank(1, &["carbon dioxide", "CO2"], "...");
            });
        });
}

#[test]
fn test_every_sample_is_listed() {
    assert_eq!(
        Samples::list(),
        vec![
            "cell-biology",
            "explicit-ids",
            "generated-raw",
            "invalid-blank",
            "missing-description",
            "no-sections",
            "stray-content",
        ]
    );
}

#[test]
fn test_answers_against_cell_biology() {
    let topic = Samples::cell_biology().parse();

    assert_eq!(check_blank(&topic, "q3-blank-1", " er "), Ok(true));
    assert_eq!(check_blank(&topic, "q3-blank-1", "golgi"), Ok(false));
    assert!(check_blank(&topic, "q3-blank-2", "er").is_err());

    let blank = topic.find_blank("q4-blank-1").unwrap();
    assert!(blank.check("Semi-Permeable"));
    assert_eq!(blank.hint(), Some('s'));
    assert_eq!(
        validation_status("osmosis", &blank.answers, true),
        ValidationStatus::Incorrect
    );
}
