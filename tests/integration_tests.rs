//! End-to-end tests running the diffdate binary.

use assert_cmd::Command;
use predicates::prelude::*;

/// Binary with today pinned to Wednesday 18 February 2026.
fn diffdate() -> Command {
    let mut cmd = Command::cargo_bin("diffdate").unwrap();
    cmd.env("DIFFDATE_TEST_TIME", "2026-02-18")
        .env_remove("RUST_LOG");
    cmd
}

mod one_shot {
    use super::*;

    #[test]
    fn two_dates_in_one_year() {
        diffdate()
            .args(["01-01-2020", "31-12-2020"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Diferença entre 01-01-2020 (quarta-feira) e 31-12-2020 (quinta-feira):",
            ))
            .stdout(predicate::str::contains("  11 meses, 30 dias\n"))
            .stdout(predicate::str::contains("Total: 365 dias"))
            .stdout(predicate::str::contains("Dias úteis: 255"))
            .stdout(predicate::str::contains("ano").not());
    }

    #[test]
    fn two_dates_as_single_argument_and_reversed() {
        diffdate()
            .arg("31/12/2020 01/01/2020")
            .assert()
            .success()
            .stdout(predicate::str::contains("Diferença entre 01-01-2020"))
            .stdout(predicate::str::contains("11 meses, 30 dias"));
    }

    #[test]
    fn identical_dates() {
        diffdate()
            .args(["15-03-2024", "15-03-2024"])
            .assert()
            .success()
            .stdout(predicate::str::contains("As datas são idênticas."))
            .stdout(predicate::str::contains("Total: 0 dias"))
            .stdout(predicate::str::contains("Dias úteis: 1"));
    }

    #[test]
    fn day_count() {
        diffdate()
            .arg("30")
            .assert()
            .success()
            .stdout(predicate::str::contains("Hoje: 18-02-2026 (quarta-feira)"))
            .stdout(predicate::str::contains(
                "Daqui a 30 dias: 20-03-2026 (sexta-feira)",
            ))
            .stdout(predicate::str::contains(
                "Há 30 dias: 19-01-2026 (segunda-feira)",
            ))
            .stdout(predicate::str::contains(
                "Dias úteis até 20-03-2026 (sem contar hoje): 22",
            ))
            .stdout(predicate::str::contains(
                "Dias úteis desde 19-01-2026 (sem contar hoje): 22",
            ));
    }

    #[test]
    fn single_date_against_today() {
        diffdate()
            .arg("25-12-2026")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Diferença entre hoje 18-02-2026 (quarta-feira) e 25-12-2026 (sexta-feira):",
            ))
            .stdout(predicate::str::contains("10 meses, 7 dias"))
            .stdout(predicate::str::contains("Total: 310 dias"))
            .stdout(predicate::str::contains("Dias úteis: 217"));
    }

    #[test]
    fn holiday_on_weekday_is_not_a_business_day() {
        diffdate()
            .args(["25-12-2025", "25-12-2025"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Dias úteis: 0"));

        diffdate()
            .args(["24-12-2025", "26-12-2025"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Dias úteis: 2"));
    }

    #[test]
    fn quit_argument() {
        diffdate()
            .arg("q")
            .assert()
            .success()
            .stdout("Até logo!\n");
    }

    #[test]
    fn invalid_argument_fails() {
        diffdate()
            .arg("foo-bar")
            .assert()
            .code(2)
            .stderr(predicate::str::contains(
                "diffdate: entrada inválida: data inválida 'foo-bar'",
            ));
    }

    #[test]
    fn too_many_dates_fail() {
        diffdate()
            .args(["01-01-2020", "02-01-2020", "03-01-2020"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("esperado 1 ou 2 valores"));
    }

    #[test]
    fn no_color_when_piped() {
        diffdate()
            .arg("30")
            .assert()
            .success()
            .stdout(predicate::str::contains("\x1b[").not());
    }
}

mod interactive {
    use super::*;

    #[test]
    fn invalid_input_then_continue_then_quit() {
        diffdate()
            .arg("--no-banner")
            .write_stdin("foo-bar\n0\n30\nq\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Entrada inválida: data inválida 'foo-bar'.",
            ))
            .stdout(predicate::str::contains(
                "Entrada inválida: o número de dias deve ser maior ou igual a 1",
            ))
            .stdout(predicate::str::contains("Hoje: 18-02-2026 (quarta-feira)"))
            .stdout(predicate::str::ends_with("Até logo!\n"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        diffdate()
            .arg("--no-banner")
            .write_stdin("01-01-2020 31-12-2020\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("11 meses, 30 dias"))
            .stdout(predicate::str::contains("Até logo!").not());
    }

    #[test]
    fn banner_and_prompt() {
        diffdate()
            .write_stdin("q\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("╔╦╗"))
            .stdout(predicate::str::contains("'q' para sair"));
    }

    #[test]
    fn banner_can_be_disabled() {
        diffdate()
            .arg("--no-banner")
            .write_stdin("q\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("╔╦╗").not());
    }
}

mod options {
    use super::*;

    #[test]
    fn holiday_listing() {
        diffdate()
            .arg("-H")
            .assert()
            .success()
            .stdout(predicate::str::contains("Feriados fixos em 2026:"))
            .stdout(predicate::str::contains("25-12-2026 (sexta-feira)"))
            .stdout(predicate::str::contains(
                "15-11-2026 (domingo) - fim de semana",
            ));
    }

    #[test]
    fn english_locale() {
        diffdate()
            .args(["--locale", "en_US.UTF-8", "30"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Hoje: 18-02-2026 (Wednesday)"));
    }

    #[test]
    fn unknown_locale_warns_and_falls_back() {
        diffdate()
            .args(["--locale", "xx_XX", "30"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Hoje: 18-02-2026 (Wednesday)"))
            .stderr(predicate::str::contains("locale unavailable"));
    }

    #[test]
    fn help_lists_input_forms() {
        diffdate()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Input forms"))
            .stdout(predicate::str::contains("--holidays"));
    }
}
