// src/services/mailer.rs

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::finance::{CreatePaymentRequestPayload, PaymentCategory, PaymentPriority},
};

// Transporte de e-mail do portal. Em produção é SMTP de verdade; fora
// dela, um transporte que só loga a mensagem.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_payment_request_email(
        &self,
        data: &CreatePaymentRequestPayload,
    ) -> Result<(), AppError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Vec<Mailbox>,
}

impl SmtpMailer {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("MAIL_HOST")?;
        let port: u16 = std::env::var("MAIL_PORT")?.parse()?;
        let user = std::env::var("MAIL_USER")?;
        let pass = std::env::var("MAIL_PASS")?;
        let from: Mailbox = std::env::var("MAIL_FROM")?.parse()?;

        // Destinatários fixos da notificação, separados por vírgula.
        let to = std::env::var("MAIL_TO")?
            .split(',')
            .map(|addr| addr.trim().parse::<Mailbox>())
            .collect::<Result<Vec<_>, _>>()?;

        let creds = Credentials::new(user, pass);
        let tls = TlsParameters::new(host.clone())?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&host)?
            .port(port)
            .tls(Tls::Required(tls))
            .credentials(creds)
            .build();

        Ok(Self { transport, from, to })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_payment_request_email(
        &self,
        data: &CreatePaymentRequestPayload,
    ) -> Result<(), AppError> {
        let subject = format!(
            "[URGENTE] Nova Solicitação de Pagamento - {} - {}",
            data.beneficiary,
            format_brl(data.amount)
        );

        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(subject)
            .header(ContentType::TEXT_HTML);
        for recipient in &self.to {
            builder = builder.to(recipient.clone());
        }

        let email = builder
            .body(payment_request_body(data))
            .map_err(|e| AppError::MailError(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map(|_| ())
            .map_err(|e| AppError::MailError(e.to_string()))
    }
}

// Usado em desenvolvimento, no lugar de uma conta SMTP descartável.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_payment_request_email(
        &self,
        data: &CreatePaymentRequestPayload,
    ) -> Result<(), AppError> {
        tracing::info!(
            beneficiary = %data.beneficiary,
            amount = %format_brl(data.amount),
            due_date = %data.due_date,
            "Notificação de solicitação de pagamento (transporte de log)"
        );
        Ok(())
    }
}

fn payment_request_body(data: &CreatePaymentRequestPayload) -> String {
    let priority_color = match data.priority {
        PaymentPriority::Alta => "#dc2626",
        PaymentPriority::Normal => "#16a34a",
    };
    let priority_label = match data.priority {
        PaymentPriority::Alta => "Alta",
        PaymentPriority::Normal => "Normal",
    };
    let category = match data.category {
        PaymentCategory::Fornecedor => "Fornecedor",
        PaymentCategory::Imposto => "Imposto",
        PaymentCategory::Servico => "Serviço",
        PaymentCategory::Reembolso => "Reembolso",
    };
    let description = data.description.as_deref().unwrap_or("N/A");

    format!(
        r#"<div style="font-family: sans-serif; padding: 20px; color: #333;">
    <h1 style="color: #0056b3;">Nova Solicitação de Pagamento</h1>
    <p>Uma nova solicitação de pagamento foi submetida e requer aprovação.</p>
    <hr>
    <h3 style="margin-top: 20px;">Detalhes:</h3>
    <ul>
        <li><strong>Beneficiário:</strong> {beneficiary}</li>
        <li><strong>Valor:</strong> {amount}</li>
        <li><strong>Vencimento:</strong> {due_date}</li>
        <li><strong>Categoria:</strong> {category}</li>
        <li><strong>Prioridade:</strong> <span style="font-weight: bold; color: {priority_color};">{priority_label}</span></li>
        <li><strong>Descrição:</strong> {description}</li>
    </ul>
    <hr>
    <p style="margin-top: 20px;">Por favor, acesse o Portal do Cliente para aprovar ou rejeitar esta solicitação.</p>
    <p style="font-size: 12px; color: #777;">Este é um e-mail automático. Não responda.</p>
</div>"#,
        beneficiary = data.beneficiary,
        amount = format_brl(data.amount),
        due_date = data.due_date,
    )
}

// Formata um valor como moeda brasileira: R$ 1.234,56
pub fn format_brl(amount: Decimal) -> String {
    let negative = amount.is_sign_negative();
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);

    let as_text = format!("{:.2}", rounded);
    let (integer, cents) = as_text.split_once('.').unwrap_or((as_text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::finance::PaymentCategory;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn formats_brl_with_thousand_separators() {
        assert_eq!(format_brl(dec("1234.56")), "R$ 1.234,56");
        assert_eq!(format_brl(dec("1000000")), "R$ 1.000.000,00");
        assert_eq!(format_brl(dec("0.5")), "R$ 0,50");
        assert_eq!(format_brl(dec("-12.3")), "-R$ 12,30");
    }

    #[test]
    fn body_carries_the_request_details() {
        let payload = CreatePaymentRequestPayload {
            beneficiary: "Posto Central".into(),
            amount: dec("5432.10"),
            due_date: "2026-09-15".into(),
            category: PaymentCategory::Fornecedor,
            priority: PaymentPriority::Alta,
            description: Some("Abastecimento da frota".into()),
            attachment_url: None,
        };

        let body = payment_request_body(&payload);

        assert!(body.contains("Posto Central"));
        assert!(body.contains("R$ 5.432,10"));
        assert!(body.contains("#dc2626")); // prioridade alta em vermelho
        assert!(body.contains("Abastecimento da frota"));
    }
}
