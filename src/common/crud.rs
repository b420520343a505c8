// src/common/crud.rs
//
// Controlador CRUD genérico que as telas amarram a um endpoint da API.
// O ciclo é sempre o mesmo: liga `carregando`, faz a rodada de rede, desliga
// `carregando` e, em caso de falha, registra a mensagem em `erro` em vez de
// propagar. Quem consome consulta `erro`/`dados`; nada aqui entra em pânico.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Falha de uma rodada de requisição contra a API remota.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FalhaTransporte {
    /// Resposta fora da faixa 2xx, com a mensagem devolvida pelo servidor.
    #[error("HTTP {status}: {mensagem}")]
    Http { status: u16, mensagem: String },

    /// A requisição nem chegou a completar (DNS, conexão, timeout...).
    #[error("Falha de rede: {0}")]
    Rede(String),
}

/// O transporte concreto de um endpoint (a "costura" que as telas e os testes
/// implementam). Um transporte atende um único recurso da API.
#[async_trait]
pub trait CrudTransport: Send + Sync {
    type Registro: Send;

    async fn listar(&self) -> Result<Vec<Self::Registro>, FalhaTransporte>;
    async fn criar(&self, payload: Value) -> Result<Self::Registro, FalhaTransporte>;
    async fn atualizar(&self, id: &str, parcial: Value)
        -> Result<Self::Registro, FalhaTransporte>;
    async fn remover(&self, id: &str) -> Result<(), FalhaTransporte>;
}

/// Prompt de confirmação renderizável antes de uma ação destrutiva.
/// O controlador só fornece o texto; decidir exibir e confirmar é da tela.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmacaoPrompt {
    pub titulo: String,
    pub mensagem: String,
    pub rotulo_confirmar: String,
    pub rotulo_cancelar: String,
}

/// Estado de um recurso CRUD amarrado a um endpoint.
///
/// Uma instância carrega no máximo uma requisição em voo por vez (`&mut self`);
/// desabilitar o gatilho enquanto `carregando` está ligado é papel da tela.
/// Não há retry nem cancelamento: falhou, ficou em `erro` e paramos.
pub struct CrudController<T: CrudTransport> {
    transporte: T,
    pub dados: Vec<T::Registro>,
    pub carregando: bool,
    pub erro: Option<String>,
}

impl<T: CrudTransport> CrudController<T> {
    pub fn new(transporte: T) -> Self {
        Self {
            transporte,
            dados: Vec::new(),
            carregando: false,
            erro: None,
        }
    }

    /// Recarrega a listagem do endpoint. Sucesso substitui `dados` inteiro.
    pub async fn listar(&mut self) {
        self.carregando = true;
        self.erro = None;

        let resultado = self.transporte.listar().await;
        self.carregando = false;

        match resultado {
            Ok(registros) => self.dados = registros,
            Err(falha) => self.erro = Some(falha.to_string()),
        }
    }

    /// Cria um registro; devolve o registro criado ou `None` com `erro` preenchido.
    pub async fn criar(&mut self, payload: Value) -> Option<&T::Registro> {
        self.carregando = true;
        self.erro = None;

        let resultado = self.transporte.criar(payload).await;
        self.carregando = false;

        match resultado {
            Ok(registro) => {
                self.dados.push(registro);
                self.dados.last()
            }
            Err(falha) => {
                self.erro = Some(falha.to_string());
                None
            }
        }
    }

    /// Atualização parcial por id.
    pub async fn atualizar(&mut self, id: &str, parcial: Value) -> Option<T::Registro> {
        self.carregando = true;
        self.erro = None;

        let resultado = self.transporte.atualizar(id, parcial).await;
        self.carregando = false;

        match resultado {
            Ok(registro) => Some(registro),
            Err(falha) => {
                self.erro = Some(falha.to_string());
                None
            }
        }
    }

    /// Remove por id. O chamador deve ter passado antes pelo prompt de
    /// confirmação (`prompt_remocao`).
    pub async fn remover(&mut self, id: &str) {
        self.carregando = true;
        self.erro = None;

        let resultado = self.transporte.remover(id).await;
        self.carregando = false;

        if let Err(falha) = resultado {
            self.erro = Some(falha.to_string());
        }
    }

    pub fn prompt_remocao(&self, descricao_alvo: &str) -> ConfirmacaoPrompt {
        ConfirmacaoPrompt {
            titulo: "Confirmar exclusão".to_string(),
            mensagem: format!(
                "Tem certeza que deseja excluir {descricao_alvo}? Esta ação não pode ser desfeita."
            ),
            rotulo_confirmar: "Excluir".to_string(),
            rotulo_cancelar: "Cancelar".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Transporte de mentira: devolve dados prontos ou a falha configurada.
    struct TransporteFake {
        falha: Option<FalhaTransporte>,
    }

    impl TransporteFake {
        fn ok() -> Self {
            Self { falha: None }
        }

        fn quebrado(falha: FalhaTransporte) -> Self {
            Self { falha: Some(falha) }
        }
    }

    #[async_trait]
    impl CrudTransport for TransporteFake {
        type Registro = String;

        async fn listar(&self) -> Result<Vec<String>, FalhaTransporte> {
            match &self.falha {
                Some(f) => Err(f.clone()),
                None => Ok(vec!["a".to_string(), "b".to_string()]),
            }
        }

        async fn criar(&self, payload: Value) -> Result<String, FalhaTransporte> {
            match &self.falha {
                Some(f) => Err(f.clone()),
                None => Ok(payload["nome"].as_str().unwrap_or("novo").to_string()),
            }
        }

        async fn atualizar(&self, id: &str, _parcial: Value) -> Result<String, FalhaTransporte> {
            match &self.falha {
                Some(f) => Err(f.clone()),
                None => Ok(format!("{id}-atualizado")),
            }
        }

        async fn remover(&self, _id: &str) -> Result<(), FalhaTransporte> {
            match &self.falha {
                Some(f) => Err(f.clone()),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn listar_preenche_dados_e_limpa_estado() {
        let mut ctl = CrudController::new(TransporteFake::ok());
        ctl.listar().await;

        assert_eq!(ctl.dados, vec!["a", "b"]);
        assert!(!ctl.carregando);
        assert!(ctl.erro.is_none());
    }

    #[tokio::test]
    async fn falha_http_vai_para_o_slot_de_erro() {
        let mut ctl = CrudController::new(TransporteFake::quebrado(FalhaTransporte::Http {
            status: 403,
            mensagem: "Acesso negado".to_string(),
        }));
        ctl.listar().await;

        assert!(ctl.dados.is_empty());
        assert!(!ctl.carregando);
        assert_eq!(ctl.erro.as_deref(), Some("HTTP 403: Acesso negado"));
    }

    #[tokio::test]
    async fn falha_de_rede_nao_propaga() {
        let mut ctl = CrudController::new(TransporteFake::quebrado(FalhaTransporte::Rede(
            "connection refused".to_string(),
        )));
        ctl.remover("x").await;

        assert_eq!(ctl.erro.as_deref(), Some("Falha de rede: connection refused"));
        assert!(!ctl.carregando);
    }

    #[tokio::test]
    async fn criar_acrescenta_ao_cache_local() {
        let mut ctl = CrudController::new(TransporteFake::ok());
        ctl.listar().await;

        let criado = ctl.criar(json!({ "nome": "c" })).await.cloned();
        assert_eq!(criado.as_deref(), Some("c"));
        assert_eq!(ctl.dados, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn nova_tentativa_limpa_erro_anterior() {
        let mut ctl = CrudController::new(TransporteFake::quebrado(FalhaTransporte::Rede(
            "timeout".to_string(),
        )));
        ctl.listar().await;
        assert!(ctl.erro.is_some());

        // Mesma instância, transporte recuperado.
        ctl.transporte = TransporteFake::ok();
        ctl.listar().await;
        assert!(ctl.erro.is_none());
        assert_eq!(ctl.dados.len(), 2);
    }

    #[tokio::test]
    async fn atualizar_devolve_registro_sem_mexer_na_lista() {
        let mut ctl = CrudController::new(TransporteFake::ok());
        ctl.listar().await;

        let atualizado = ctl.atualizar("a", json!({ "status": "CONCLUIDA" })).await;
        assert_eq!(atualizado.as_deref(), Some("a-atualizado"));
        assert_eq!(ctl.dados, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn prompt_de_remocao_e_renderizavel() {
        let ctl = CrudController::new(TransporteFake::ok());
        let prompt = ctl.prompt_remocao("a ocorrência #123");

        assert_eq!(prompt.titulo, "Confirmar exclusão");
        assert!(prompt.mensagem.contains("a ocorrência #123"));
        assert_eq!(prompt.rotulo_confirmar, "Excluir");
    }
}
