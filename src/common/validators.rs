// src/common/validators.rs

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use validator::ValidationError;

// Fuso fixo de Brasília (UTC-3). O Brasil não adota mais horário de verão.
const SEGUNDOS_FUSO_BRASILIA: i32 = 3 * 3600;

/// Valida um CPF pelo algoritmo oficial de módulo 11.
///
/// Aceita o número com ou sem máscara (pontos e hífen são descartados).
/// Rejeita sequências com todos os dígitos iguais, que passariam no
/// cálculo dos verificadores mas não são CPFs emitidos.
pub fn cpf_valido(bruto: &str) -> bool {
    let digitos: Vec<u32> = bruto.chars().filter_map(|c| c.to_digit(10)).collect();

    if digitos.len() != 11 {
        return false;
    }
    if digitos.iter().all(|&d| d == digitos[0]) {
        return false;
    }

    // Dígito verificador sobre os `n` primeiros dígitos, pesos (n+1)..2.
    let verificador = |n: usize| -> u32 {
        let soma: u32 = digitos[..n]
            .iter()
            .zip((2..=(n as u32 + 1)).rev())
            .map(|(d, peso)| d * peso)
            .sum();
        soma * 10 % 11 % 10
    };

    verificador(9) == digitos[9] && verificador(10) == digitos[10]
}

/// Checagem de formato de e-mail: `local@dominio.tld`, sem espaços e sem
/// `@` fora do separador. Propositalmente permissiva, não é RFC 5322.
pub fn email_valido(texto: &str) -> bool {
    let segmento_ok =
        |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');

    let Some((local, resto)) = texto.split_once('@') else {
        return false;
    };
    let Some((dominio, tld)) = resto.rsplit_once('.') else {
        return false;
    };

    segmento_ok(local) && segmento_ok(dominio) && segmento_ok(tld)
}

/// Formata uma data (RFC 3339 ou `AAAA-MM-DD`) como `dd/mm/aaaa` no fuso de
/// Brasília. Entrada inválida vira string vazia, nunca erro.
pub fn formatar_data_br(entrada: &str) -> String {
    let Some(fuso) = FixedOffset::west_opt(SEGUNDOS_FUSO_BRASILIA) else {
        return String::new();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(entrada) {
        return dt.with_timezone(&fuso).format("%d/%m/%Y").to_string();
    }
    if let Ok(data) = NaiveDate::parse_from_str(entrada, "%Y-%m-%d") {
        return data.format("%d/%m/%Y").to_string();
    }

    String::new()
}

/// Mesma formatação para valores já carregados do banco.
pub fn formatar_instante_br(instante: &DateTime<Utc>) -> String {
    match FixedOffset::west_opt(SEGUNDOS_FUSO_BRASILIA) {
        Some(fuso) => instante.with_timezone(&fuso).format("%d/%m/%Y").to_string(),
        None => String::new(),
    }
}

// Adaptadores para o derive do `validator` nos payloads.

pub fn validar_cpf(valor: &str) -> Result<(), ValidationError> {
    if cpf_valido(valor) {
        Ok(())
    } else {
        let mut erro = ValidationError::new("cpf");
        erro.message = Some("CPF inválido.".into());
        Err(erro)
    }
}

pub fn validar_email(valor: &str) -> Result<(), ValidationError> {
    if email_valido(valor) {
        Ok(())
    } else {
        let mut erro = ValidationError::new("email");
        erro.message = Some("E-mail inválido.".into());
        Err(erro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPF_VALIDO: &str = "52998224725";

    #[test]
    fn cpf_conhecido_passa() {
        assert!(cpf_valido(CPF_VALIDO));
    }

    #[test]
    fn cpf_mascarado_passa() {
        assert!(cpf_valido("529.982.247-25"));
    }

    #[test]
    fn cpf_com_digitos_iguais_falha() {
        for d in 0..=9 {
            let repetido: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
            assert!(!cpf_valido(&repetido), "sequência {repetido} deveria falhar");
        }
    }

    #[test]
    fn cpf_com_tamanho_errado_falha() {
        assert!(!cpf_valido(""));
        assert!(!cpf_valido("5299822472"));
        assert!(!cpf_valido("529982247255"));
        assert!(!cpf_valido("abc"));
    }

    #[test]
    fn cpf_e_sensivel_a_cada_digito() {
        // Perturba cada posição do CPF válido e espera reprovação.
        for posicao in 0..11 {
            let mut digitos: Vec<u8> = CPF_VALIDO.bytes().map(|b| b - b'0').collect();
            digitos[posicao] = (digitos[posicao] + 1) % 10;
            let mutado: String = digitos.iter().map(|d| char::from(b'0' + d)).collect();
            assert!(
                !cpf_valido(&mutado),
                "mutação na posição {posicao} ({mutado}) deveria falhar"
            );
        }
    }

    #[test]
    fn email_formatos() {
        assert!(email_valido("a@b.co"));
        assert!(email_valido("fulano.tal@ssp.gov.br"));
        assert!(!email_valido("a@b"));
        assert!(!email_valido(""));
        assert!(!email_valido("a b@c.co"));
        assert!(!email_valido("a@@b.co"));
        assert!(!email_valido("@b.co"));
        assert!(!email_valido("a@.co"));
        assert!(!email_valido("a@b."));
    }

    #[test]
    fn data_rfc3339_no_fuso_de_brasilia() {
        // 02:00 UTC ainda é o dia anterior em Brasília.
        assert_eq!(formatar_data_br("2026-03-10T02:00:00Z"), "09/03/2026");
        assert_eq!(formatar_data_br("2026-03-10T12:00:00-03:00"), "10/03/2026");
    }

    #[test]
    fn data_simples_nao_desloca() {
        assert_eq!(formatar_data_br("2026-03-10"), "10/03/2026");
    }

    #[test]
    fn data_invalida_vira_vazio() {
        assert_eq!(formatar_data_br(""), "");
        assert_eq!(formatar_data_br("amanhã"), "");
        assert_eq!(formatar_data_br("2026-13-45"), "");
    }
}
